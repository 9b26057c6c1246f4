//! Eye-contact extraction from iris position within the eye region.
//!
//! Gaze direction is estimated from where each iris center sits
//! horizontally between the eye corners. When both irises are roughly
//! centered, the subject is looking at the camera. The iris points
//! exist only when the detector runs with refined face landmarks;
//! frames without them are excluded from the ratio entirely rather
//! than counted as non-eye-contact.

use clarity_core::landmarks::face;
use clarity_core::FaceLandmarks;

use crate::calibration::GazeCalibration;

/// Fraction of valid frames where the subject looks at the camera.
///
/// A frame is valid when all six required points (both eye corner
/// pairs and both iris centers) are present. Returns 0.0 when no
/// frame is valid or the stream is empty.
pub fn eye_contact_ratio(faces: &[Option<FaceLandmarks>], calibration: &GazeCalibration) -> f64 {
    let mut looking = 0usize;
    let mut valid = 0usize;

    for landmarks in faces.iter().flatten() {
        let left = iris_fraction(landmarks, face::LEFT_EYE_OUTER, face::LEFT_EYE_INNER, face::LEFT_IRIS_CENTER);
        let right = iris_fraction(landmarks, face::RIGHT_EYE_OUTER, face::RIGHT_EYE_INNER, face::RIGHT_IRIS_CENTER);

        let (Some(left), Some(right)) = (left, right) else {
            continue;
        };

        valid += 1;

        let left_centered = left >= calibration.centered_min && left <= calibration.centered_max;
        let right_centered = right >= calibration.centered_min && right <= calibration.centered_max;

        if left_centered && right_centered {
            looking += 1;
        }
    }

    if valid == 0 {
        return 0.0;
    }

    looking as f64 / valid as f64
}

/// Horizontal iris position as a fraction of eye width, measured from
/// the outer corner (0 = outer, 1 = inner). A zero-width eye defaults
/// to 0.5 (centered). `None` when any required point is missing.
fn iris_fraction(
    landmarks: &FaceLandmarks,
    outer_idx: usize,
    inner_idx: usize,
    iris_idx: usize,
) -> Option<f64> {
    let outer = landmarks.point(outer_idx)?;
    let inner = landmarks.point(inner_idx)?;
    let iris = landmarks.point(iris_idx)?;

    let eye_width = (outer.x - inner.x).abs();
    if eye_width == 0.0 {
        return Some(0.5);
    }

    Some((iris.x - outer.x).abs() / eye_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_core::LandmarkPoint;

    /// Face with irises placed at the given fraction of eye width.
    fn face_with_iris_fraction(fraction: f64) -> FaceLandmarks {
        let mut points = vec![LandmarkPoint::new(0.0, 0.0, 0.0); face::REFINED_POINT_COUNT];

        // Left eye spanning x 0.30..0.40
        points[face::LEFT_EYE_OUTER] = LandmarkPoint::new(0.30, 0.40, 0.0);
        points[face::LEFT_EYE_INNER] = LandmarkPoint::new(0.40, 0.40, 0.0);
        points[face::LEFT_IRIS_CENTER] = LandmarkPoint::new(0.30 + 0.10 * fraction, 0.40, 0.0);

        // Right eye spanning x 0.70..0.60
        points[face::RIGHT_EYE_OUTER] = LandmarkPoint::new(0.70, 0.40, 0.0);
        points[face::RIGHT_EYE_INNER] = LandmarkPoint::new(0.60, 0.40, 0.0);
        points[face::RIGHT_IRIS_CENTER] = LandmarkPoint::new(0.70 - 0.10 * fraction, 0.40, 0.0);

        FaceLandmarks::new(points)
    }

    #[test]
    fn test_all_absent_stream_is_zero() {
        let faces: Vec<Option<FaceLandmarks>> = vec![None; 10];
        let ratio = eye_contact_ratio(&faces, &GazeCalibration { centered_min: 0.3, centered_max: 0.7 });
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_empty_stream_is_zero() {
        let ratio = eye_contact_ratio(&[], &GazeCalibration { centered_min: 0.3, centered_max: 0.7 });
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_centered_irises_give_full_ratio() {
        let faces: Vec<Option<FaceLandmarks>> =
            (0..20).map(|_| Some(face_with_iris_fraction(0.5))).collect();
        let ratio = eye_contact_ratio(&faces, &GazeCalibration { centered_min: 0.3, centered_max: 0.7 });
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_averted_irises_give_zero_ratio() {
        let faces: Vec<Option<FaceLandmarks>> =
            (0..20).map(|_| Some(face_with_iris_fraction(0.9))).collect();
        let ratio = eye_contact_ratio(&faces, &GazeCalibration { centered_min: 0.3, centered_max: 0.7 });
        assert_eq!(ratio, 0.0);
    }

    /// Face with unit-width eyes so the iris fraction is exact.
    fn face_with_exact_fraction(fraction: f64) -> FaceLandmarks {
        let mut points = vec![LandmarkPoint::new(0.0, 0.0, 0.0); face::REFINED_POINT_COUNT];

        points[face::LEFT_EYE_OUTER] = LandmarkPoint::new(0.0, 0.40, 0.0);
        points[face::LEFT_EYE_INNER] = LandmarkPoint::new(1.0, 0.40, 0.0);
        points[face::LEFT_IRIS_CENTER] = LandmarkPoint::new(fraction, 0.40, 0.0);

        points[face::RIGHT_EYE_OUTER] = LandmarkPoint::new(0.0, 0.40, 0.0);
        points[face::RIGHT_EYE_INNER] = LandmarkPoint::new(1.0, 0.40, 0.0);
        points[face::RIGHT_IRIS_CENTER] = LandmarkPoint::new(fraction, 0.40, 0.0);

        FaceLandmarks::new(points)
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let faces = vec![
            Some(face_with_exact_fraction(0.3)),
            Some(face_with_exact_fraction(0.7)),
        ];
        let ratio = eye_contact_ratio(&faces, &GazeCalibration { centered_min: 0.3, centered_max: 0.7 });
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_frames_without_iris_points_are_skipped() {
        // Base mesh without the refined iris points: the frame must not
        // enter the denominator.
        let no_iris = FaceLandmarks::new(vec![
            LandmarkPoint::new(0.0, 0.0, 0.0);
            face::MESH_POINT_COUNT
        ]);

        let faces = vec![
            Some(no_iris),
            Some(face_with_iris_fraction(0.5)),
        ];
        let ratio = eye_contact_ratio(&faces, &GazeCalibration { centered_min: 0.3, centered_max: 0.7 });
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_eye_width_defaults_to_centered() {
        let mut points = vec![LandmarkPoint::new(0.0, 0.0, 0.0); face::REFINED_POINT_COUNT];
        // Degenerate eyes: outer and inner corners coincide.
        points[face::LEFT_EYE_OUTER] = LandmarkPoint::new(0.35, 0.40, 0.0);
        points[face::LEFT_EYE_INNER] = LandmarkPoint::new(0.35, 0.40, 0.0);
        points[face::LEFT_IRIS_CENTER] = LandmarkPoint::new(0.35, 0.40, 0.0);
        points[face::RIGHT_EYE_OUTER] = LandmarkPoint::new(0.65, 0.40, 0.0);
        points[face::RIGHT_EYE_INNER] = LandmarkPoint::new(0.65, 0.40, 0.0);
        points[face::RIGHT_IRIS_CENTER] = LandmarkPoint::new(0.65, 0.40, 0.0);

        let faces = vec![Some(FaceLandmarks::new(points))];
        let ratio = eye_contact_ratio(&faces, &GazeCalibration { centered_min: 0.3, centered_max: 0.7 });
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_stream_ratio() {
        let mut faces = Vec::new();
        for i in 0..10 {
            if i < 6 {
                faces.push(Some(face_with_iris_fraction(0.5)));
            } else {
                faces.push(Some(face_with_iris_fraction(0.95)));
            }
        }
        let ratio = eye_contact_ratio(&faces, &GazeCalibration { centered_min: 0.3, centered_max: 0.7 });
        assert!((ratio - 0.6).abs() < 1e-12);
    }
}
