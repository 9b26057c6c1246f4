//! Posture extraction from torso length.
//!
//! Torso length is the distance between the shoulder midpoint and the
//! hip midpoint in normalized coordinates. An upright subject shows a
//! longer torso; slouching compresses it.

use clarity_core::geometry::{distance, midpoint};
use clarity_core::landmarks::pose;
use clarity_core::PoseLandmarks;

/// Mean torso length over all valid frames.
///
/// A frame is valid when both shoulders and both hips are present.
/// Returns 0.0 when no frame is valid or the stream is empty.
pub fn average_torso_length(poses: &[Option<PoseLandmarks>]) -> f64 {
    let mut lengths = Vec::new();

    for landmarks in poses.iter().flatten() {
        if let Some(length) = torso_length(landmarks) {
            lengths.push(length);
        }
    }

    clarity_core::stats::mean(&lengths)
}

/// Shoulder-midpoint to hip-midpoint distance for one frame, or
/// `None` if any of the four points is missing.
fn torso_length(landmarks: &PoseLandmarks) -> Option<f64> {
    let left_shoulder = landmarks.point(pose::LEFT_SHOULDER)?;
    let right_shoulder = landmarks.point(pose::RIGHT_SHOULDER)?;
    let left_hip = landmarks.point(pose::LEFT_HIP)?;
    let right_hip = landmarks.point(pose::RIGHT_HIP)?;

    let shoulder_mid = midpoint(left_shoulder, right_shoulder);
    let hip_mid = midpoint(left_hip, right_hip);

    Some(distance(&shoulder_mid, &hip_mid))
}
