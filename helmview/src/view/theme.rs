//! Theme-aware color palette for HelmView.
//!
//! Semantic colors for the dashboard and the telegraph, resolved against the
//! active light or dark theme.

use iced::{Color, Theme};

/// Get colors from the theme's extended palette.
pub struct ThemeColors<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeColors<'a> {
    /// Create a new ThemeColors from a theme reference.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn palette(&self) -> &iced::theme::palette::Extended {
        self.theme.extended_palette()
    }

    // ========================================================================
    // Text Colors
    // ========================================================================

    /// Primary text color.
    pub fn text(&self) -> Color {
        self.palette().background.base.text
    }

    /// Muted/secondary text color.
    pub fn text_muted(&self) -> Color {
        self.palette().background.weak.text
    }

    // ========================================================================
    // Accent Colors
    // ========================================================================

    /// Primary accent color.
    pub fn primary(&self) -> Color {
        self.palette().primary.base.color
    }

    // ========================================================================
    // Border Colors
    // ========================================================================

    /// Default border color.
    pub fn border(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.25, 0.25, 0.3)
        } else {
            Color::from_rgb(0.8, 0.8, 0.82)
        }
    }

    /// Subtle border (less prominent).
    pub fn border_subtle(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.2, 0.2, 0.22)
        } else {
            Color::from_rgb(0.85, 0.85, 0.87)
        }
    }

    // ========================================================================
    // Card/Plot Colors
    // ========================================================================

    /// Card background color.
    pub fn card_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.12, 0.12, 0.14)
        } else {
            Color::from_rgb(1.0, 1.0, 1.0)
        }
    }

    /// Row/track background.
    pub fn row_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.13, 0.13, 0.15)
        } else {
            Color::from_rgb(0.98, 0.98, 0.99)
        }
    }

    /// Plot grid lines.
    pub fn chart_grid(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.2, 0.2, 0.25)
        } else {
            Color::from_rgb(0.85, 0.85, 0.88)
        }
    }

    // ========================================================================
    // Telegraph Colors
    // ========================================================================

    /// Telegraph bezel around the detent stack.
    pub fn telegraph_bezel(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.16, 0.14, 0.11)
        } else {
            Color::from_rgb(0.86, 0.82, 0.74)
        }
    }

    /// Idle ahead detent.
    pub fn detent_ahead(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.18, 0.2, 0.24)
        } else {
            Color::from_rgb(0.93, 0.94, 0.96)
        }
    }

    /// Idle Stop detent.
    pub fn detent_stop(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.3, 0.12, 0.12)
        } else {
            Color::from_rgb(0.96, 0.86, 0.86)
        }
    }

    /// Highlighted (nearest) detent. Same in both themes for recognition.
    pub fn detent_active(&self) -> Color {
        Color::from_rgb(0.95, 0.7, 0.15)
    }

    /// Text on the highlighted detent.
    pub fn detent_active_text(&self) -> Color {
        Color::from_rgb(0.1, 0.08, 0.02)
    }

    /// Rail fill.
    pub fn rail_fill(&self) -> Color {
        Color::from_rgb(0.95, 0.7, 0.15)
    }

    /// Heavy (major) rail tick.
    pub fn rail_tick_major(&self) -> Color {
        self.text()
    }

    /// Light rail tick.
    pub fn rail_tick_minor(&self) -> Color {
        self.text_muted()
    }

    // ========================================================================
    // Status Colors (consistent across themes for recognition)
    // ========================================================================

    /// Connected/online status.
    pub fn status_connected(&self) -> Color {
        Color::from_rgb(0.2, 0.8, 0.2)
    }

    /// Disconnected/offline status.
    pub fn status_disconnected(&self) -> Color {
        Color::from_rgb(0.8, 0.2, 0.2)
    }

    // ========================================================================
    // Utility
    // ========================================================================

    /// Check if the current theme is dark.
    pub fn is_dark(&self) -> bool {
        self.palette().is_dark
    }
}

/// Convenience function to create ThemeColors.
pub fn colors(theme: &Theme) -> ThemeColors<'_> {
    ThemeColors::new(theme)
}
