//! Fundamental types for the Clarity metrics engine.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Unique identifier for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub Uuid);

impl AnalysisId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

/// A detected anatomical keypoint with coordinates normalized to
/// frame dimensions ([0,1] for x/y, detector-relative depth for z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LandmarkPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_point3(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}

/// Full face mesh for one frame. With refined landmarks enabled the
/// detector appends iris centers at indices 468 and 473; without them
/// those indices are simply out of range and read as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmarks(pub Vec<LandmarkPoint>);

/// 33-point body pose for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseLandmarks(pub Vec<LandmarkPoint>);

/// 21-point hand skeleton for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks(pub Vec<LandmarkPoint>);

macro_rules! landmark_set_impl {
    ($name:ident) => {
        impl $name {
            pub fn new(points: Vec<LandmarkPoint>) -> Self {
                Self(points)
            }

            /// Point at a fixed schema index. Out-of-range indices are
            /// absence, not an error.
            pub fn point(&self, index: usize) -> Option<&LandmarkPoint> {
                self.0.get(index)
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }
    };
}

landmark_set_impl!(FaceLandmarks);
landmark_set_impl!(PoseLandmarks);
landmark_set_impl!(HandLandmarks);

/// Left/right hand detections for one frame. Either hand may be
/// absent independently of the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    pub left: Option<HandLandmarks>,
    pub right: Option<HandLandmarks>,
}

impl HandFrame {
    pub fn new(left: Option<HandLandmarks>, right: Option<HandLandmarks>) -> Self {
        Self { left, right }
    }

    /// Frame with no hands detected.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Frame-aligned landmark streams for one analysis run.
///
/// Element *i* of each stream describes the same video frame; the
/// constructor enforces this alignment so extractors can index all
/// streams by a common frame index. A `None` element means the
/// detector found nothing for that structure in that frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkStreams {
    faces: Vec<Option<FaceLandmarks>>,
    poses: Vec<Option<PoseLandmarks>>,
    hands: Vec<HandFrame>,
}

impl LandmarkStreams {
    pub fn new(
        faces: Vec<Option<FaceLandmarks>>,
        poses: Vec<Option<PoseLandmarks>>,
        hands: Vec<HandFrame>,
    ) -> Result<Self> {
        let expected = faces.len();
        if poses.len() != expected {
            return Err(Error::StreamMisaligned {
                stream: "pose",
                expected,
                actual: poses.len(),
            });
        }
        if hands.len() != expected {
            return Err(Error::StreamMisaligned {
                stream: "hands",
                expected,
                actual: hands.len(),
            });
        }

        Ok(Self {
            faces,
            poses,
            hands,
        })
    }

    /// Streams with zero frames.
    pub fn empty() -> Self {
        Self {
            faces: Vec::new(),
            poses: Vec::new(),
            hands: Vec::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.faces.len()
    }

    pub fn faces(&self) -> &[Option<FaceLandmarks>] {
        &self.faces
    }

    pub fn poses(&self) -> &[Option<PoseLandmarks>] {
        &self.poses
    }

    pub fn hands(&self) -> &[HandFrame] {
        &self.hands
    }
}
