//! Nearest-detent classification of a continuous speed.

use crate::detent::Detent;

/// Index of the detent closest to `speed`.
///
/// Detents are scanned in catalog order and only a strictly smaller distance
/// replaces the current best, so a speed exactly between two detents selects
/// the earlier (faster) one. Out-of-range speeds still get the nearest
/// detent. Returns `None` only for an empty catalog.
pub fn classify(speed: f32, detents: &[Detent]) -> Option<usize> {
    let mut iter = detents.iter().enumerate();
    let (mut best, first) = iter.next()?;
    let mut best_distance = (speed - first.target_speed).abs();

    for (index, detent) in iter {
        let distance = (speed - detent.target_speed).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }

    Some(best)
}
