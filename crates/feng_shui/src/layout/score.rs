use super::types::{Bounds, Piece};
use crate::constants::{MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE};

/// Feng shui score of a room in `[0, 100]`.
///
/// Rewards pieces whose centers sit close to the room center. The mean
/// center distance is normalized by the distance from the room center to
/// the origin corner, which is not the largest distance a piece center can
/// actually reach. Scores keep that curve as is.
///
/// Rounding is half away from zero, so a raw 87.5 becomes 88.
/// An empty room, or a room without a usable normalizer, scores 50.
pub fn score(pieces: &[Piece], bounds: Bounds) -> u8 {
    if pieces.is_empty() {
        return NEUTRAL_SCORE;
    }

    let center = bounds.center();
    let max_distance = (center.x * center.x + center.y * center.y).sqrt();
    if !max_distance.is_finite() || max_distance <= 0.0 {
        return NEUTRAL_SCORE;
    }

    // sum in sorted order so the float total does not depend on piece order
    let mut distances: Vec<f64> = pieces
        .iter()
        .map(|p| p.center().distance(center))
        .collect();
    distances.sort_unstable_by(f64::total_cmp);
    let avg_distance = distances.iter().sum::<f64>() / distances.len() as f64;

    let raw = 100.0 - (avg_distance / max_distance) * 100.0;
    if raw.is_nan() {
        return NEUTRAL_SCORE;
    }
    raw.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)).round() as u8
}
