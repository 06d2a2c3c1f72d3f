//! Rail gauge fill height.

use crate::layout::ResolvedLayout;

/// Fill height for the rail gauges.
///
/// Everything below the active detent is filled, plus half of the active
/// detent itself, so the fill level sits mid-band on the current notch.
/// An empty layout, a missing index or an index past the end give 0.
pub fn fill(active_index: Option<usize>, layout: &ResolvedLayout) -> f32 {
    let Some(index) = active_index else {
        return 0.0;
    };
    let Some(active) = layout.heights.get(index) else {
        return 0.0;
    };

    let below: f32 = layout.heights[index + 1..].iter().sum();
    below + active * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ResolvedLayout {
        ResolvedLayout::from_heights(vec![28.0, 25.0, 20.0, 18.0, 10.0, 14.0])
    }

    #[test]
    fn test_stop_is_half_full() {
        assert_eq!(fill(Some(5), &layout()), 7.0);
    }

    #[test]
    fn test_flank_fills_everything_below() {
        assert_eq!(fill(Some(0), &layout()), 25.0 + 20.0 + 18.0 + 10.0 + 14.0 + 14.0);
    }

    #[test]
    fn test_standard() {
        assert_eq!(fill(Some(2), &layout()), 18.0 + 10.0 + 14.0 + 10.0);
    }

    #[test]
    fn test_fill_rises_with_detent() {
        let layout = layout();
        let fills: Vec<f32> = (0..6).map(|i| fill(Some(i), &layout)).collect();
        assert!(fills.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(fill(Some(0), &ResolvedLayout::default()), 0.0);
        assert_eq!(fill(None, &layout()), 0.0);
        assert_eq!(fill(Some(6), &layout()), 0.0);
    }
}
