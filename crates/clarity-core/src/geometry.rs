//! Geometric helpers shared by the spatial extractors.

use crate::types::LandmarkPoint;

/// Euclidean distance between two points in 3D.
pub fn distance(p1: &LandmarkPoint, p2: &LandmarkPoint) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    let dz = p1.z - p2.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Euclidean distance in the image plane, ignoring depth.
pub fn distance_2d(p1: &LandmarkPoint, p2: &LandmarkPoint) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Componentwise midpoint of two points.
pub fn midpoint(p1: &LandmarkPoint, p2: &LandmarkPoint) -> LandmarkPoint {
    LandmarkPoint::new(
        (p1.x + p2.x) / 2.0,
        (p1.y + p2.y) / 2.0,
        (p1.z + p2.z) / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_3_4_5() {
        let p1 = LandmarkPoint::new(0.0, 0.0, 0.0);
        let p2 = LandmarkPoint::new(0.3, 0.4, 0.0);
        assert!((distance(&p1, &p2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_distance_2d_ignores_depth() {
        let p1 = LandmarkPoint::new(0.0, 0.0, 0.0);
        let p2 = LandmarkPoint::new(0.3, 0.4, 9.0);
        assert!((distance_2d(&p1, &p2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let p1 = LandmarkPoint::new(0.2, 0.4, 0.0);
        let p2 = LandmarkPoint::new(0.6, 0.8, 0.2);
        let mid = midpoint(&p1, &p2);
        assert!((mid.x - 0.4).abs() < 1e-12);
        assert!((mid.y - 0.6).abs() < 1e-12);
        assert!((mid.z - 0.1).abs() < 1e-12);
    }
}
