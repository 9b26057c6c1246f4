//! # Clarity-Metrics
//!
//! Feature extraction and scoring engine for nonverbal communication
//! analysis. Consumes frame-aligned streams of optional face, pose,
//! and hand landmark sets produced by an external detector and
//! reduces them to six normalized 0-100 scores:
//!
//! 1. **Eye contact** — fraction of frames with both irises centered
//! 2. **Posture** — mean shoulder-to-hip torso length
//! 3. **Gesture activity** — mean per-frame wrist displacement
//! 4. **Smile** — fraction of frames classified as smiling
//! 5. **Head stability** — inverted mean nose movement
//! 6. **Gesture variety** — spatial spread of fingertip positions
//!
//! ## Pipeline
//!
//! Six independent extractors each reduce a stream to one raw feature
//! (the leaves of the dependency graph), then the [`Scorer`] maps all
//! six through per-metric calibration curves into [0, 100]. The
//! calibration constants are empirical and live in one adjustable
//! table ([`CalibrationConfig`]), not in extractor code.

pub mod analyzer;
pub mod calibration;
pub mod gaze;
pub mod hands;
pub mod head;
pub mod posture;
pub mod scoring;
pub mod smile;

pub use analyzer::*;
pub use calibration::*;
pub use gaze::*;
pub use hands::*;
pub use head::*;
pub use posture::*;
pub use scoring::*;
pub use smile::*;
