//! Head-stability extraction from nose movement.
//!
//! The nose position is sampled from every frame where the pose was
//! detected; absent frames contribute no sample, so a detection gap
//! is bridged as if it did not exist rather than counted as a
//! zero-distance hold. Lower movement means a steadier head — the
//! scorer inverts this raw feature.

use clarity_core::geometry::distance_2d;
use clarity_core::landmarks::pose;
use clarity_core::stats::mean;
use clarity_core::PoseLandmarks;

/// Mean 2D nose displacement between consecutive retained frames,
/// divided by `frame_skip`. Returns 0.0 for fewer than two retained
/// positions.
pub fn head_movement(poses: &[Option<PoseLandmarks>], frame_skip: usize) -> f64 {
    let positions: Vec<_> = poses
        .iter()
        .flatten()
        .filter_map(|landmarks| landmarks.point(pose::NOSE).copied())
        .collect();

    if positions.len() < 2 {
        return 0.0;
    }

    let movements: Vec<f64> = positions
        .windows(2)
        .map(|w| distance_2d(&w[0], &w[1]))
        .collect();

    mean(&movements) / frame_skip.max(1) as f64
}
