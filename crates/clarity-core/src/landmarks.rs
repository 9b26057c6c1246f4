//! Fixed landmark index tables for the external pose/face/hand
//! detector schema (MediaPipe Holistic).
//!
//! Every extractor reads points at these indices; keeping them as
//! named constants keeps the schema mapping auditable against the
//! detector's documentation.

/// Face mesh indices (468 base points, 478 with refined iris points).
pub mod face {
    /// Base face mesh point count.
    pub const MESH_POINT_COUNT: usize = 468;
    /// Point count when the detector is configured with refined
    /// (iris) landmarks. Iris centers exist only in this mode.
    pub const REFINED_POINT_COUNT: usize = 478;

    pub const LEFT_EYE_OUTER: usize = 33;
    pub const LEFT_EYE_INNER: usize = 133;
    pub const RIGHT_EYE_OUTER: usize = 362;
    pub const RIGHT_EYE_INNER: usize = 263;
    pub const LEFT_IRIS_CENTER: usize = 468;
    pub const RIGHT_IRIS_CENTER: usize = 473;

    pub const MOUTH_CORNER_LEFT: usize = 61;
    pub const MOUTH_CORNER_RIGHT: usize = 291;
    pub const UPPER_LIP_CENTER: usize = 13;
    pub const LOWER_LIP_CENTER: usize = 14;
}

/// Body pose indices (33-point skeleton).
pub mod pose {
    pub const POINT_COUNT: usize = 33;

    pub const NOSE: usize = 0;
    pub const LEFT_SHOULDER: usize = 11;
    pub const RIGHT_SHOULDER: usize = 12;
    pub const LEFT_HIP: usize = 23;
    pub const RIGHT_HIP: usize = 24;
}

/// Hand indices (21-point hand skeleton, identical for both hands).
pub mod hand {
    pub const POINT_COUNT: usize = 21;

    pub const WRIST: usize = 0;
    pub const MIDDLE_FINGER_TIP: usize = 12;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iris_indices_require_refined_mesh() {
        assert!(face::LEFT_IRIS_CENTER >= face::MESH_POINT_COUNT);
        assert!(face::RIGHT_IRIS_CENTER >= face::MESH_POINT_COUNT);
        assert!(face::LEFT_IRIS_CENTER < face::REFINED_POINT_COUNT);
        assert!(face::RIGHT_IRIS_CENTER < face::REFINED_POINT_COUNT);
    }

    #[test]
    fn test_indices_within_structure_bounds() {
        assert!(face::MOUTH_CORNER_RIGHT < face::MESH_POINT_COUNT);
        assert!(pose::RIGHT_HIP < pose::POINT_COUNT);
        assert!(hand::MIDDLE_FINGER_TIP < hand::POINT_COUNT);
    }
}
