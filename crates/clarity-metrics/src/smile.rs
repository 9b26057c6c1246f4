//! Smile extraction from mouth geometry.
//!
//! Two-pass algorithm. The first pass takes the median mouth width
//! over the whole run as a per-subject baseline, adapting to facial
//! geometry instead of relying on an absolute width threshold. The
//! second pass classifies each frame as smiling when either the mouth
//! corners lift relative to the lip centers or the mouth widens
//! noticeably past the baseline. The OR combination tolerates frames
//! where one indicator is unreliable (occlusion, viewing angle).

use clarity_core::landmarks::face;
use clarity_core::stats::median;
use clarity_core::FaceLandmarks;

use crate::calibration::SmileCalibration;

/// Fraction of valid frames classified as smiling.
///
/// Frames missing any of the four mouth points are excluded from both
/// the baseline and the ratio. Returns 0.0 when no frame is valid.
pub fn smile_ratio(faces: &[Option<FaceLandmarks>], calibration: &SmileCalibration) -> f64 {
    // Pass 1: per-subject mouth-width baseline.
    let widths: Vec<f64> = faces
        .iter()
        .flatten()
        .filter_map(mouth_geometry)
        .map(|g| g.width)
        .collect();

    if widths.is_empty() {
        return 0.0;
    }
    let baseline = median(&widths);

    // Pass 2: classify each valid frame.
    let mut smiling = 0usize;
    let mut valid = 0usize;

    for geometry in faces.iter().flatten().filter_map(mouth_geometry) {
        valid += 1;

        let lifted = geometry.corner_lift > calibration.corner_lift_threshold;
        let widened = baseline > 0.0
            && (geometry.width - baseline) / baseline > calibration.width_increase_threshold;

        if lifted || widened {
            smiling += 1;
        }
    }

    if valid == 0 {
        return 0.0;
    }

    smiling as f64 / valid as f64
}

struct MouthGeometry {
    /// Horizontal distance between the mouth corners.
    width: f64,
    /// Lip-center mean y minus corner mean y. Image y grows downward,
    /// so lifted corners make this positive.
    corner_lift: f64,
}

fn mouth_geometry(landmarks: &FaceLandmarks) -> Option<MouthGeometry> {
    let left_corner = landmarks.point(face::MOUTH_CORNER_LEFT)?;
    let right_corner = landmarks.point(face::MOUTH_CORNER_RIGHT)?;
    let upper_lip = landmarks.point(face::UPPER_LIP_CENTER)?;
    let lower_lip = landmarks.point(face::LOWER_LIP_CENTER)?;

    let width = (right_corner.x - left_corner.x).abs();
    let lip_center_y = (upper_lip.y + lower_lip.y) / 2.0;
    let corner_y = (left_corner.y + right_corner.y) / 2.0;

    Some(MouthGeometry {
        width,
        corner_lift: lip_center_y - corner_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_core::LandmarkPoint;

    const CAL: SmileCalibration = SmileCalibration {
        corner_lift_threshold: 0.008,
        width_increase_threshold: 0.03,
    };

    /// Face with the given mouth width and corner lift.
    fn face_with_mouth(width: f64, corner_lift: f64) -> FaceLandmarks {
        let mut points = vec![LandmarkPoint::new(0.0, 0.0, 0.0); face::MESH_POINT_COUNT];

        let lip_y = 0.60;
        let corner_y = lip_y - corner_lift;

        points[face::MOUTH_CORNER_LEFT] = LandmarkPoint::new(0.5 - width / 2.0, corner_y, 0.0);
        points[face::MOUTH_CORNER_RIGHT] = LandmarkPoint::new(0.5 + width / 2.0, corner_y, 0.0);
        points[face::UPPER_LIP_CENTER] = LandmarkPoint::new(0.5, lip_y - 0.01, 0.0);
        points[face::LOWER_LIP_CENTER] = LandmarkPoint::new(0.5, lip_y + 0.01, 0.0);

        FaceLandmarks::new(points)
    }

    #[test]
    fn test_empty_stream_is_zero() {
        assert_eq!(smile_ratio(&[], &CAL), 0.0);
    }

    #[test]
    fn test_all_absent_stream_is_zero() {
        let faces: Vec<Option<FaceLandmarks>> = vec![None; 8];
        assert_eq!(smile_ratio(&faces, &CAL), 0.0);
    }

    #[test]
    fn test_lifted_corners_every_frame() {
        // Corner lift 0.01 exceeds the 0.008 threshold in all frames.
        let faces: Vec<_> = (0..10).map(|_| Some(face_with_mouth(0.4, 0.01))).collect();
        let ratio = smile_ratio(&faces, &CAL);
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_neutral_mouth_is_zero() {
        // No lift, constant width: neither indicator fires.
        let faces: Vec<_> = (0..10).map(|_| Some(face_with_mouth(0.4, 0.0))).collect();
        assert_eq!(smile_ratio(&faces, &CAL), 0.0);
    }

    #[test]
    fn test_width_increase_alone_qualifies() {
        // Half the frames widen 10% past the median baseline with no
        // corner lift.
        let mut faces = Vec::new();
        for _ in 0..10 {
            faces.push(Some(face_with_mouth(0.40, 0.0)));
        }
        for _ in 0..5 {
            faces.push(Some(face_with_mouth(0.44, 0.0)));
        }
        let ratio = smile_ratio(&faces, &CAL);
        assert!((ratio - 5.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_smiling_stream() {
        let mut faces = Vec::new();
        for i in 0..100 {
            let lift = if i < 70 { 0.05 } else { 0.0 };
            faces.push(Some(face_with_mouth(0.4, lift)));
        }
        let ratio = smile_ratio(&faces, &CAL);
        assert!((ratio - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_incomplete_frames_excluded_from_both_passes() {
        // Mouthless faces must not drag the baseline or the denominator.
        let no_mouth = FaceLandmarks::new(vec![LandmarkPoint::new(0.0, 0.0, 0.0); 10]);
        let faces = vec![
            Some(no_mouth),
            Some(face_with_mouth(0.4, 0.01)),
            Some(face_with_mouth(0.4, 0.01)),
        ];
        let ratio = smile_ratio(&faces, &CAL);
        assert!((ratio - 1.0).abs() < 1e-12);
    }
}
