//! Calibration curves mapping raw features into 0-100 scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calibration::CalibrationConfig;

/// The six raw features, one per metric, as produced by the
/// extractors before any calibration is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawFeatures {
    /// Fraction of valid frames with both irises centered, in [0, 1].
    pub eye_contact_ratio: f64,
    /// Mean shoulder-to-hip distance, typically 0.2-0.5.
    pub avg_torso_length: f64,
    /// Mean wrist displacement per frame, typically 0.001-0.05.
    pub avg_hand_motion: f64,
    /// Fraction of valid frames classified as smiling, in [0, 1].
    pub smile_ratio: f64,
    /// Mean consecutive nose movement; lower is steadier.
    pub head_stability_movement: f64,
    /// Summed x/y standard deviation of fingertip positions.
    pub gesture_variety_spread: f64,
}

impl RawFeatures {
    /// Rounded copy matching the caller-visible precision contract:
    /// ratios, lengths, and spread to 3 decimals; motion-scale
    /// features to 4.
    pub fn rounded(&self) -> Self {
        Self {
            eye_contact_ratio: round_to(self.eye_contact_ratio, 3),
            avg_torso_length: round_to(self.avg_torso_length, 3),
            avg_hand_motion: round_to(self.avg_hand_motion, 4),
            smile_ratio: round_to(self.smile_ratio, 3),
            head_stability_movement: round_to(self.head_stability_movement, 4),
            gesture_variety_spread: round_to(self.gesture_variety_spread, 3),
        }
    }

    /// Name-to-value map with the fixed raw-feature names.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("eye_contact_ratio", self.eye_contact_ratio),
            ("avg_torso_length", self.avg_torso_length),
            ("avg_hand_motion", self.avg_hand_motion),
            ("smile_ratio", self.smile_ratio),
            ("head_stability_movement", self.head_stability_movement),
            ("gesture_variety_spread", self.gesture_variety_spread),
        ])
    }
}

/// The six communication-quality scores, each clamped to [0, 100] and
/// rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub eye_contact_score: f64,
    pub posture_score: f64,
    pub gesture_score: f64,
    pub smile_score: f64,
    pub head_stability_score: f64,
    pub gesture_variety_score: f64,
}

impl ScoreSet {
    /// Name-to-value map with the fixed metric names.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("eye_contact_score", self.eye_contact_score),
            ("posture_score", self.posture_score),
            ("gesture_score", self.gesture_score),
            ("smile_score", self.smile_score),
            ("head_stability_score", self.head_stability_score),
            ("gesture_variety_score", self.gesture_variety_score),
        ])
    }
}

/// Maps raw features through the per-metric calibration curves.
///
/// A pure function of (calibration, raw features): identical inputs
/// always yield identical score sets.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    calibration: CalibrationConfig,
}

impl Scorer {
    pub fn new(calibration: CalibrationConfig) -> Self {
        Self { calibration }
    }

    pub fn score(&self, raw: &RawFeatures) -> ScoreSet {
        ScoreSet {
            eye_contact_score: finalize(raw.eye_contact_ratio * 100.0),
            posture_score: finalize(self.posture_score(raw.avg_torso_length)),
            gesture_score: finalize(self.gesture_score(raw.avg_hand_motion)),
            smile_score: finalize(raw.smile_ratio * 100.0),
            head_stability_score: finalize(self.head_stability_score(raw.head_stability_movement)),
            gesture_variety_score: finalize(self.variety_score(raw.gesture_variety_spread)),
        }
    }

    /// Linear rescale of torso length over the calibrated domain.
    fn posture_score(&self, torso_length: f64) -> f64 {
        let cal = &self.calibration.posture;
        (torso_length - cal.torso_min) / (cal.torso_max - cal.torso_min) * 100.0
    }

    /// Triangular curve peaking at the optimal motion: a linear ramp
    /// below it and a half-slope linear decay above it.
    fn gesture_score(&self, motion: f64) -> f64 {
        let cal = &self.calibration.gesture;
        if motion < cal.optimal_motion {
            motion / cal.optimal_motion * 100.0
        } else {
            let excess = motion - cal.optimal_motion;
            100.0 - excess / cal.decay_span * 50.0
        }
    }

    /// Inverted linear mapping: less movement scores higher.
    fn head_stability_score(&self, movement: f64) -> f64 {
        100.0 - movement * self.calibration.head_stability.movement_slope
    }

    /// Linear rescale of fingertip spread over the calibrated domain.
    fn variety_score(&self, spread: f64) -> f64 {
        let cal = &self.calibration.gesture_variety;
        (spread - cal.spread_min) / (cal.spread_max - cal.spread_min) * 100.0
    }

    pub fn calibration(&self) -> &CalibrationConfig {
        &self.calibration
    }
}

/// Clamp to [0, 100] and round to one decimal place.
fn finalize(score: f64) -> f64 {
    round_to(score.clamp(0.0, 100.0), 1)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
