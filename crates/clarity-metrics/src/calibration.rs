//! Calibration table for the metrics engine.
//!
//! Every threshold and domain bound used by the extractors and the
//! scorer lives here. The values are empirically chosen domain
//! parameters, not derived quantities; recalibrating against new
//! footage means editing this table (or loading an override file),
//! never touching extractor logic.

use serde::{Deserialize, Serialize};

use clarity_core::{Error, Result};

/// Complete calibration for all six metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    pub gaze: GazeCalibration,
    pub posture: PostureCalibration,
    pub gesture: GestureCalibration,
    pub smile: SmileCalibration,
    pub head_stability: HeadStabilityCalibration,
    pub gesture_variety: GestureVarietyCalibration,
}

/// Eye-contact classification window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GazeCalibration {
    /// Lower bound of the "iris centered" window, as a fraction of
    /// eye width measured from the outer corner.
    pub centered_min: f64,
    /// Upper bound of the centered window.
    pub centered_max: f64,
}

/// Torso-length domain for the posture score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PostureCalibration {
    /// Torso length mapping to score 0 (slouched).
    pub torso_min: f64,
    /// Torso length mapping to score 100 (upright).
    pub torso_max: f64,
}

/// Triangular gesture-activity curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureCalibration {
    /// Mean wrist displacement that scores 100. Both less and more
    /// motion are penalized.
    pub optimal_motion: f64,
    /// Motion excess over optimal that costs 50 points; the decay
    /// slope is half as steep as the ramp below optimal.
    pub decay_span: f64,
}

/// Smile classification thresholds. Either indicator alone qualifies
/// a frame, which tolerates occlusion and off-axis viewing angles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SmileCalibration {
    /// Minimum lip-center-to-corner y offset counting as corner lift.
    pub corner_lift_threshold: f64,
    /// Minimum mouth-width increase over the per-subject baseline,
    /// as a fraction of the baseline.
    pub width_increase_threshold: f64,
}

/// Inverted linear head-movement mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeadStabilityCalibration {
    /// Score points lost per unit of mean nose movement.
    pub movement_slope: f64,
}

/// Fingertip-spread domain for the gesture-variety score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureVarietyCalibration {
    /// Spread mapping to score 0.
    pub spread_min: f64,
    /// Spread mapping to score 100.
    pub spread_max: f64,
    /// Minimum pooled fingertip samples for a meaningful spread
    /// estimate; below this the raw feature is 0.0.
    pub min_samples: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            gaze: GazeCalibration {
                centered_min: 0.3,
                centered_max: 0.7,
            },
            posture: PostureCalibration {
                torso_min: 0.2,
                torso_max: 0.5,
            },
            gesture: GestureCalibration {
                optimal_motion: 0.02,
                decay_span: 0.03,
            },
            smile: SmileCalibration {
                corner_lift_threshold: 0.008,
                width_increase_threshold: 0.03,
            },
            head_stability: HeadStabilityCalibration {
                movement_slope: 5000.0,
            },
            gesture_variety: GestureVarietyCalibration {
                spread_min: 0.05,
                spread_max: 0.3,
                min_samples: 10,
            },
        }
    }
}

impl CalibrationConfig {
    /// Load calibration from a file, with `CLARITY_`-prefixed
    /// environment variables taking precedence.
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("CLARITY").separator("__"))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Load calibration overrides from environment variables only.
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("CLARITY").separator("__"))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))
    }
}
