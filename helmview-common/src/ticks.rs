//! Rail scale ticks.
//!
//! The scale reads 0..10 (speed / 3) and is laid linearly over the stack,
//! independent of detent boundaries.

use crate::layout::ResolvedLayout;

/// Number of ticks on a rail scale.
pub const TICK_COUNT: usize = 11;

/// Every n-th tick is drawn heavier.
pub const MAJOR_EVERY: u8 = 5;

/// Share of the top detent kept free above the last tick.
pub const TOP_HEADROOM_RATIO: f32 = 0.25;

/// A single scale mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Scale value, 0..=10.
    pub value: u8,
    /// Pixels from the zero end of the scale.
    pub y_offset: f32,
    /// Drawn heavier (0, 5 and 10).
    pub major: bool,
}

/// Vertical span covered by the ticks, from the baseline to just under the
/// top headroom.
pub fn usable_span(layout: &ResolvedLayout) -> f32 {
    let top_headroom = layout.top_height() * TOP_HEADROOM_RATIO;
    (layout.stack_height - top_headroom) - layout.baseline_offset
}

/// Generate the 11 scale ticks for a layout.
///
/// Degenerate layouts (no detents or zero stack height) give no ticks.
pub fn ticks(layout: &ResolvedLayout) -> Vec<Tick> {
    if layout.is_degenerate() {
        return Vec::new();
    }

    let span = usable_span(layout);
    let steps = (TICK_COUNT - 1) as f32;

    (0..TICK_COUNT as u8)
        .map(|value| Tick {
            value,
            y_offset: layout.baseline_offset + span * f32::from(value) / steps,
            major: value % MAJOR_EVERY == 0,
        })
        .collect()
}
