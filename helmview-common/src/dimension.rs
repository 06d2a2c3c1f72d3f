//! Resolution of symbolic size tokens to device pixels.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::length::{DEFAULT_REM_PX, LengthExpr, Viewport, parse};

/// Resolves a symbolic size token to its current length in pixels.
///
/// Answers must stay stable until the next viewport change. Returning `None`
/// marks the token as unresolved; the layout treats it as zero height.
pub trait DimensionProvider {
    fn resolve_length(&self, token: &str) -> Option<f32>;
}

impl<P: DimensionProvider + ?Sized> DimensionProvider for &P {
    fn resolve_length(&self, token: &str) -> Option<f32> {
        (**self).resolve_length(token)
    }
}

/// Fixed token table, mostly for tests and headless use.
impl DimensionProvider for HashMap<String, f32> {
    fn resolve_length(&self, token: &str) -> Option<f32> {
        self.get(token).copied()
    }
}

/// Telegraph height tokens as configured by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionConfig {
    /// Pixels per `rem`.
    #[serde(default = "default_rem_px")]
    pub rem_px: f32,

    /// Token name -> length expression.
    #[serde(default = "default_tokens")]
    pub tokens: BTreeMap<String, String>,
}

fn default_rem_px() -> f32 {
    DEFAULT_REM_PX
}

fn default_tokens() -> BTreeMap<String, String> {
    [
        ("h-tele-xl", "clamp(2.5rem, 6vh, 3.5rem)"),
        ("h-tele-xxl", "clamp(3.5rem, 9vh, 5rem)"),
        ("h-tele-lg", "clamp(3rem, 7.5vh, 4.25rem)"),
        ("h-tele-md", "clamp(3rem, 7vh, 4rem)"),
        ("h-tele-sm", "clamp(2.75rem, 6.5vh, 3.75rem)"),
        ("h-tele-stop", "clamp(2.25rem, 5.5vh, 3.25rem)"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for DimensionConfig {
    fn default() -> Self {
        Self {
            rem_px: default_rem_px(),
            tokens: default_tokens(),
        }
    }
}

impl DimensionConfig {
    /// Parse every token expression.
    pub fn compile(&self) -> Result<TokenDimensions> {
        let tokens = self
            .tokens
            .iter()
            .map(|(name, expr)| Ok((name.clone(), parse(expr)?)))
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(TokenDimensions {
            tokens,
            viewport: Viewport::default().with_rem(self.rem_px),
        })
    }
}

/// Token table evaluated against the current viewport.
#[derive(Debug, Clone)]
pub struct TokenDimensions {
    tokens: HashMap<String, LengthExpr>,
    viewport: Viewport,
}

impl TokenDimensions {
    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport size, keeping the configured root font size.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    /// Number of configured tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl DimensionProvider for TokenDimensions {
    fn resolve_length(&self, token: &str) -> Option<f32> {
        let px = self.tokens.get(token)?.to_px(&self.viewport);
        px.is_finite().then_some(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detent::catalog;

    #[test]
    fn test_default_config_covers_catalog() {
        let dims = DimensionConfig::default().compile().unwrap();
        for detent in catalog() {
            assert!(
                dims.resolve_length(detent.height_token).is_some(),
                "missing token {}",
                detent.height_token
            );
        }
    }

    #[test]
    fn test_flank_smaller_than_full() {
        let dims = DimensionConfig::default().compile().unwrap();
        let flank = dims.resolve_length("h-tele-xl").unwrap();
        let full = dims.resolve_length("h-tele-xxl").unwrap();
        assert!(flank < full);
    }

    #[test]
    fn test_viewport_change_changes_answers() {
        let mut dims = DimensionConfig::default().compile().unwrap();
        dims.set_viewport_size(1280.0, 700.0);
        let small = dims.resolve_length("h-tele-xxl").unwrap();
        dims.set_viewport_size(1280.0, 800.0);
        let large = dims.resolve_length("h-tele-xxl").unwrap();
        assert_eq!(small, 63.0);
        assert_eq!(large, 72.0);
    }

    #[test]
    fn test_unknown_token_is_unresolved() {
        let dims = DimensionConfig::default().compile().unwrap();
        assert_eq!(dims.resolve_length("h-tele-missing"), None);
    }

    #[test]
    fn test_bad_expression_fails_compile() {
        let mut config = DimensionConfig::default();
        config
            .tokens
            .insert("h-tele-xl".to_string(), "6 vh".to_string());
        assert!(config.compile().is_err());
    }
}
