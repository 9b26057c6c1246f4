//! Analysis pipeline: six extractors, one explicit join, one scorer.
//!
//! Each analysis run is independent and purely computational; the
//! analyzer holds only configuration, so one instance can serve
//! concurrent callers through `&self`. Bounding total frames is the
//! caller's responsibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clarity_core::{AnalysisId, LandmarkStreams, Result};

use crate::calibration::CalibrationConfig;
use crate::gaze::eye_contact_ratio;
use crate::hands::{average_hand_motion, gesture_variety_spread};
use crate::head::head_movement;
use crate::posture::average_torso_length;
use crate::scoring::{RawFeatures, ScoreSet, Scorer};
use crate::smile::smile_ratio;

/// Analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Frame-skip interval the upstream decoder used when sampling
    /// frames. Motion features divide by this so they stay expressed
    /// per underlying video frame.
    pub frame_skip: usize,

    /// Calibration table for extractors and scorer.
    pub calibration: CalibrationConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            frame_skip: 1,
            calibration: CalibrationConfig::default(),
        }
    }
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: AnalysisId,
    pub analyzed_at: DateTime<Utc>,
    /// Number of frames in the input streams (including frames where
    /// the detector found nothing).
    pub frame_count: usize,
    /// Raw features, rounded to their documented precision.
    pub raw_features: RawFeatures,
    /// The six normalized scores.
    pub scores: ScoreSet,
}

impl AnalysisReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Stateless-per-call metrics pipeline.
#[derive(Debug, Clone, Default)]
pub struct MetricsAnalyzer {
    config: AnalyzerConfig,
    scorer: Scorer,
}

impl MetricsAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let scorer = Scorer::new(config.calibration.clone());
        Self { config, scorer }
    }

    /// Run all six extractors over the aligned streams, then map the
    /// raw features through the calibration curves.
    ///
    /// The scorer needs all six raw features at once, so the join is
    /// explicit: no partial results leave this function.
    pub fn analyze(&self, streams: &LandmarkStreams) -> AnalysisReport {
        let cal = &self.config.calibration;
        let frame_skip = self.config.frame_skip;

        let raw = RawFeatures {
            eye_contact_ratio: eye_contact_ratio(streams.faces(), &cal.gaze),
            avg_torso_length: average_torso_length(streams.poses()),
            avg_hand_motion: average_hand_motion(streams.hands(), frame_skip),
            smile_ratio: smile_ratio(streams.faces(), &cal.smile),
            head_stability_movement: head_movement(streams.poses(), frame_skip),
            gesture_variety_spread: gesture_variety_spread(streams.hands(), &cal.gesture_variety),
        };

        tracing::debug!(
            frames = streams.frame_count(),
            eye_contact = raw.eye_contact_ratio,
            torso = raw.avg_torso_length,
            hand_motion = raw.avg_hand_motion,
            smile = raw.smile_ratio,
            head_movement = raw.head_stability_movement,
            variety = raw.gesture_variety_spread,
            "extracted raw features"
        );

        let scores = self.scorer.score(&raw);

        AnalysisReport {
            id: AnalysisId::new(),
            analyzed_at: Utc::now(),
            frame_count: streams.frame_count(),
            raw_features: raw.rounded(),
            scores,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
