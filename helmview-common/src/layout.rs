//! Pixel layout of the telegraph stack.

use crate::detent::Detent;
use crate::dimension::DimensionProvider;

/// Per-detent pixel heights resolved for the current viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedLayout {
    /// One height per detent, in catalog order.
    pub heights: Vec<f32>,
    /// Sum of `heights`.
    pub stack_height: f32,
    /// Distance from the scale's zero end to its origin: half of Stop's height.
    pub baseline_offset: f32,
}

impl ResolvedLayout {
    /// Build a layout from already resolved heights.
    pub fn from_heights(heights: Vec<f32>) -> Self {
        let stack_height: f32 = heights.iter().sum();
        let baseline_offset = heights.last().map_or(0.0, |stop| stop * 0.5);
        Self {
            heights,
            stack_height,
            baseline_offset,
        }
    }

    /// True when there is nothing to draw.
    pub fn is_degenerate(&self) -> bool {
        self.heights.is_empty() || self.stack_height <= 0.0
    }

    /// Height of the topmost detent, or 0 for an empty layout.
    pub fn top_height(&self) -> f32 {
        self.heights.first().copied().unwrap_or(0.0)
    }
}

/// A measured length the layout can use as is. Zero is a valid height.
fn usable_length(px: f32) -> Option<f32> {
    (px.is_finite() && px >= 0.0).then_some(px)
}

/// Resolve every detent's height token.
///
/// All tokens are resolved together on every call so the totals always come
/// from one set of answers. Unresolvable, negative or non-finite lengths
/// count as zero.
pub fn resolve<P: DimensionProvider + ?Sized>(detents: &[Detent], provider: &P) -> ResolvedLayout {
    let heights = detents
        .iter()
        .map(|detent| match provider.resolve_length(detent.height_token) {
            Some(px) if usable_length(px).is_some() => px,
            Some(px) => {
                tracing::warn!(
                    detent = detent.id,
                    token = detent.height_token,
                    px,
                    "Height token resolved to an unusable length, using 0"
                );
                0.0
            }
            None => {
                tracing::warn!(
                    detent = detent.id,
                    token = detent.height_token,
                    "Height token did not resolve, using 0"
                );
                0.0
            }
        })
        .collect();

    ResolvedLayout::from_heights(heights)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::detent::catalog;

    fn fixed(heights: [f32; 6]) -> HashMap<String, f32> {
        catalog()
            .iter()
            .zip(heights)
            .map(|(d, h)| (d.height_token.to_string(), h))
            .collect()
    }

    #[test]
    fn test_resolve_sums_heights() {
        let provider = fixed([28.0, 25.0, 20.0, 18.0, 10.0, 14.0]);
        let layout = resolve(catalog(), &provider);

        assert_eq!(layout.heights, vec![28.0, 25.0, 20.0, 18.0, 10.0, 14.0]);
        assert_eq!(layout.stack_height, 115.0);
        assert_eq!(layout.baseline_offset, 7.0);
        assert!(!layout.is_degenerate());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let provider = fixed([41.3, 57.9, 50.1, 47.7, 44.2, 39.6]);
        let first = resolve(catalog(), &provider);
        let second = resolve(catalog(), &provider);
        assert_eq!(first, second);
        assert_eq!(first.stack_height.to_bits(), second.stack_height.to_bits());
    }

    #[test]
    fn test_unresolved_token_counts_as_zero() {
        let mut provider = fixed([28.0, 25.0, 20.0, 18.0, 10.0, 14.0]);
        provider.remove("h-tele-lg");
        provider.insert("h-tele-sm".to_string(), f32::NAN);

        let layout = resolve(catalog(), &provider);

        assert_eq!(layout.heights.len(), 6);
        assert_eq!(layout.heights[2], 0.0);
        assert_eq!(layout.heights[4], 0.0);
        assert_eq!(layout.stack_height, 28.0 + 25.0 + 18.0 + 14.0);
    }

    #[test]
    fn test_zero_length_is_usable() {
        assert_eq!(usable_length(0.0), Some(0.0));
        assert_eq!(usable_length(12.5), Some(12.5));
        assert_eq!(usable_length(-0.5), None);
        assert_eq!(usable_length(f32::INFINITY), None);
        assert_eq!(usable_length(f32::NAN), None);

        let mut provider = fixed([28.0, 25.0, 20.0, 18.0, 10.0, 14.0]);
        provider.insert("h-tele-md".to_string(), 0.0);
        let layout = resolve(catalog(), &provider);
        assert_eq!(layout.heights[3], 0.0);
        assert_eq!(layout.stack_height, 97.0);
    }

    #[test]
    fn test_empty_catalog() {
        let provider = fixed([1.0; 6]);
        let layout = resolve(&[], &provider);

        assert!(layout.heights.is_empty());
        assert_eq!(layout.stack_height, 0.0);
        assert_eq!(layout.baseline_offset, 0.0);
        assert!(layout.is_degenerate());
    }

    #[test]
    fn test_all_unresolved_is_degenerate() {
        let provider: HashMap<String, f32> = HashMap::new();
        let layout = resolve(catalog(), &provider);

        assert_eq!(layout.heights, vec![0.0; 6]);
        assert!(layout.is_degenerate());
    }
}
