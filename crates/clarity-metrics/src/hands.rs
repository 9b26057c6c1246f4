//! Hand-based extraction: gesture activity (wrist motion) and gesture
//! variety (fingertip spread).
//!
//! Both hands are tracked independently. An occluded hand keeps its
//! last known wrist position, so a detection gap contributes no
//! displacement but does not reset the motion baseline — a hand that
//! reappears is measured against where it was last seen.

use clarity_core::geometry::distance;
use clarity_core::landmarks::hand;
use clarity_core::stats::{mean, std_dev};
use clarity_core::{HandFrame, HandLandmarks, LandmarkPoint};

use crate::calibration::GestureVarietyCalibration;

/// Mean wrist displacement per underlying video frame.
///
/// Displacements from both hands pool into one list; the mean is
/// divided by `frame_skip` so subsampled streams report per-frame
/// motion. Returns 0.0 for streams shorter than two frames or when no
/// hand is seen in two or more frames.
pub fn average_hand_motion(frames: &[HandFrame], frame_skip: usize) -> f64 {
    if frames.len() < 2 {
        return 0.0;
    }

    let mut displacements = Vec::new();

    // Last known wrist position per hand, carried across absences.
    let mut prev_left: Option<LandmarkPoint> = None;
    let mut prev_right: Option<LandmarkPoint> = None;

    for frame in frames {
        track_wrist(frame.left.as_ref(), &mut prev_left, &mut displacements);
        track_wrist(frame.right.as_ref(), &mut prev_right, &mut displacements);
    }

    if displacements.is_empty() {
        return 0.0;
    }

    mean(&displacements) / frame_skip.max(1) as f64
}

fn track_wrist(
    landmarks: Option<&HandLandmarks>,
    prev: &mut Option<LandmarkPoint>,
    displacements: &mut Vec<f64>,
) {
    let Some(landmarks) = landmarks else {
        return;
    };
    let Some(wrist) = landmarks.point(hand::WRIST) else {
        return;
    };

    if let Some(prev_wrist) = prev {
        displacements.push(distance(wrist, prev_wrist));
    }
    *prev = Some(*wrist);
}

/// Spatial spread of middle-fingertip positions across the run.
///
/// Fingertip (x, y) positions from every present hand pool into one
/// flat list regardless of hand identity or time order; the spread is
/// std-dev(x) + std-dev(y). Returns exactly 0.0 when fewer than
/// `min_samples` points were collected, regardless of their spread.
pub fn gesture_variety_spread(
    frames: &[HandFrame],
    calibration: &GestureVarietyCalibration,
) -> f64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for frame in frames {
        for landmarks in [frame.left.as_ref(), frame.right.as_ref()].into_iter().flatten() {
            if let Some(tip) = landmarks.point(hand::MIDDLE_FINGER_TIP) {
                xs.push(tip.x);
                ys.push(tip.y);
            }
        }
    }

    if xs.len() < calibration.min_samples {
        return 0.0;
    }

    std_dev(&xs) + std_dev(&ys)
}
