//! Engine order telegraph model.
//!
//! Owns the resolved layout and tick list for one mount of the control and
//! derives a [`TelegraphFrame`] for every render. The commanded speed itself
//! belongs to the host; the telegraph only reads it.

use crate::classifier::classify;
use crate::detent::Detent;
use crate::dimension::DimensionProvider;
use crate::fill::fill;
use crate::layout::{ResolvedLayout, resolve};
use crate::ticks::{Tick, ticks};

/// Derived state for the current speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveState {
    /// Nearest detent, `None` for an empty catalog.
    pub active_index: Option<usize>,
    /// Rail fill height in pixels.
    pub fill_height: f32,
}

/// Everything a render needs, taken from a single layout generation.
///
/// ```
/// use std::collections::HashMap;
/// use helmview_common::{Telegraph, catalog};
///
/// let heights: HashMap<String, f32> = catalog()
///     .iter()
///     .zip([28.0, 25.0, 20.0, 18.0, 10.0, 14.0])
///     .map(|(d, h)| (d.height_token.to_string(), h))
///     .collect();
/// let telegraph = Telegraph::mount(catalog(), &heights);
///
/// let frame = telegraph.frame(10.0);
/// assert_eq!(frame.detents.len(), frame.heights.len());
/// assert_eq!(frame.stack_height, frame.heights.iter().sum::<f32>());
/// assert_eq!(frame.active.active_index, Some(4));
/// assert_eq!(frame.ticks.len(), 11);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TelegraphFrame<'a> {
    /// Layout generation the values were derived from.
    pub generation: u64,
    /// Detents, fastest first.
    pub detents: &'static [Detent],
    /// Resolved height of each detent, same order as `detents`.
    pub heights: &'a [f32],
    /// Sum of `heights`.
    pub stack_height: f32,
    /// Highlighted detent and rail fill for the frame's speed.
    pub active: ActiveState,
    /// Rail scale, empty for a degenerate layout.
    pub ticks: &'a [Tick],
}

impl TelegraphFrame<'_> {
    /// Whether the detent at `index` is highlighted.
    pub fn is_active(&self, index: usize) -> bool {
        self.active.active_index == Some(index)
    }

    /// Height of the detent button at `index`.
    pub fn height_of(&self, index: usize) -> f32 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }
}

/// The telegraph control's derived state.
#[derive(Debug, Clone)]
pub struct Telegraph {
    detents: &'static [Detent],
    layout: ResolvedLayout,
    ticks: Vec<Tick>,
    generation: u64,
}

impl Telegraph {
    /// Mount the control: measure every token and build the tick scale.
    pub fn mount<P: DimensionProvider + ?Sized>(detents: &'static [Detent], provider: &P) -> Self {
        let layout = resolve(detents, provider);
        let ticks = ticks(&layout);

        tracing::debug!(
            detents = detents.len(),
            stack_height = layout.stack_height,
            "Telegraph mounted"
        );

        Self {
            detents,
            layout,
            ticks,
            generation: 0,
        }
    }

    /// Re-measure after a viewport change.
    ///
    /// Layout and ticks are replaced together; nothing from the previous
    /// generation survives.
    pub fn relayout<P: DimensionProvider + ?Sized>(&mut self, provider: &P) {
        let layout = resolve(self.detents, provider);
        let ticks = ticks(&layout);

        self.layout = layout;
        self.ticks = ticks;
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            stack_height = self.layout.stack_height,
            baseline = self.layout.baseline_offset,
            "Telegraph relayout"
        );
    }

    /// Derive the render state for `speed`.
    ///
    /// `speed` is expected to be clamped by the host already.
    pub fn frame(&self, speed: f32) -> TelegraphFrame<'_> {
        let active_index = classify(speed, self.detents);
        let fill_height = fill(active_index, &self.layout);

        TelegraphFrame {
            generation: self.generation,
            detents: self.detents,
            heights: &self.layout.heights,
            stack_height: self.layout.stack_height,
            active: ActiveState {
                active_index,
                fill_height,
            },
            ticks: &self.ticks,
        }
    }

    /// Speed the host should adopt when the detent at `index` is pressed.
    pub fn command(&self, index: usize) -> Option<f32> {
        self.detents.get(index).map(|d| d.target_speed)
    }

    pub fn detents(&self) -> &'static [Detent] {
        self.detents
    }

    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::detent::catalog;

    fn provider(heights: [f32; 6]) -> HashMap<String, f32> {
        catalog()
            .iter()
            .zip(heights)
            .map(|(d, h)| (d.height_token.to_string(), h))
            .collect()
    }

    #[test]
    fn test_frame_for_standard() {
        let telegraph = Telegraph::mount(catalog(), &provider([28.0, 25.0, 20.0, 18.0, 10.0, 14.0]));
        let frame = telegraph.frame(20.0);

        assert_eq!(frame.active.active_index, Some(2));
        assert_eq!(frame.active.fill_height, 52.0);
        assert_eq!(telegraph.layout().baseline_offset, 7.0);
        assert!(frame.is_active(2));
        assert!(!frame.is_active(1));
        assert_eq!(frame.ticks.len(), 11);
    }

    #[test]
    fn test_relayout_replaces_everything() {
        let mut telegraph =
            Telegraph::mount(catalog(), &provider([28.0, 25.0, 20.0, 18.0, 10.0, 14.0]));
        let before = telegraph.frame(0.0).ticks[10];

        telegraph.relayout(&provider([56.0, 50.0, 40.0, 36.0, 20.0, 28.0]));
        let frame = telegraph.frame(0.0);

        assert_eq!(frame.generation, 1);
        assert_eq!(frame.stack_height, 230.0);
        assert_eq!(frame.active.fill_height, 14.0);
        assert_eq!(frame.ticks[10].y_offset, before.y_offset * 2.0);
    }

    #[test]
    fn test_speed_change_keeps_generation() {
        let telegraph = Telegraph::mount(catalog(), &provider([30.0; 6]));
        assert_eq!(telegraph.frame(0.0).generation, telegraph.frame(28.0).generation);
    }

    #[test]
    fn test_command() {
        let telegraph = Telegraph::mount(catalog(), &provider([30.0; 6]));
        assert_eq!(telegraph.command(0), Some(28.0));
        assert_eq!(telegraph.command(5), Some(0.0));
        assert_eq!(telegraph.command(6), None);
    }

    #[test]
    fn test_empty_catalog_degrades() {
        let telegraph = Telegraph::mount(&[], &provider([30.0; 6]));
        let frame = telegraph.frame(12.0);

        assert_eq!(frame.active.active_index, None);
        assert_eq!(frame.active.fill_height, 0.0);
        assert_eq!(frame.stack_height, 0.0);
        assert!(frame.ticks.is_empty());
    }
}
