//! Engine order telegraph detents.
//!
//! The catalog is the single ordered source for both the button stack and
//! the rail geometry. Order is top to bottom: highest commanded speed first,
//! ending at Stop.

use crate::error::{Error, Result};

/// A named, fixed commanded-speed setting on the telegraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detent {
    /// Unique symbolic name (e.g., "full").
    pub id: &'static str,
    /// One or two display lines.
    pub label: &'static [&'static str],
    /// Speed in knots this detent commands.
    pub target_speed: f32,
    /// Name of the length token giving this detent's height.
    pub height_token: &'static str,
}

impl Detent {
    /// Label lines joined with a space ("Ahead Full").
    pub fn name(&self) -> String {
        self.label.join(" ")
    }

    /// Tooltip text, e.g. "Ahead Full (25 kts)".
    pub fn title(&self) -> String {
        format!("{} ({} kts)", self.name(), self.target_speed)
    }

    /// Whether this is the zero-speed detent.
    pub fn is_stop(&self) -> bool {
        self.target_speed == 0.0
    }
}

/// Flank is deliberately given a smaller token than Ahead Full.
pub const DETENTS: [Detent; 6] = [
    Detent {
        id: "flank",
        label: &["Flank"],
        target_speed: 28.0,
        height_token: "h-tele-xl",
    },
    Detent {
        id: "full",
        label: &["Ahead", "Full"],
        target_speed: 25.0,
        height_token: "h-tele-xxl",
    },
    Detent {
        id: "standard",
        label: &["Std"],
        target_speed: 20.0,
        height_token: "h-tele-lg",
    },
    Detent {
        id: "ahead23",
        label: &["Ahead", "2/3"],
        target_speed: 18.0,
        height_token: "h-tele-md",
    },
    Detent {
        id: "ahead13",
        label: &["Ahead", "1/3"],
        target_speed: 10.0,
        height_token: "h-tele-sm",
    },
    Detent {
        id: "stop",
        label: &["Stop"],
        target_speed: 0.0,
        height_token: "h-tele-stop",
    },
];

/// The standard telegraph catalog.
pub fn catalog() -> &'static [Detent] {
    &DETENTS
}

/// Check the catalog invariants.
///
/// Speeds must be strictly decreasing, ids and tokens unique, and exactly one
/// detent (the last) must be Stop.
pub fn validate_catalog(detents: &[Detent]) -> Result<()> {
    let Some(last) = detents.last() else {
        return Err(Error::Catalog("catalog is empty".to_string()));
    };

    for pair in detents.windows(2) {
        if pair[0].target_speed <= pair[1].target_speed {
            return Err(Error::Catalog(format!(
                "'{}' ({}) must be faster than '{}' ({})",
                pair[0].id, pair[0].target_speed, pair[1].id, pair[1].target_speed
            )));
        }
    }

    let stops = detents.iter().filter(|d| d.is_stop()).count();
    if stops != 1 || !last.is_stop() {
        return Err(Error::Catalog(
            "exactly one Stop detent is required, at the bottom".to_string(),
        ));
    }

    for (i, detent) in detents.iter().enumerate() {
        let duplicate = detents[i + 1..]
            .iter()
            .any(|other| other.id == detent.id || other.height_token == detent.height_token);
        if duplicate {
            return Err(Error::Catalog(format!(
                "'{}' shares its id or height token with another detent",
                detent.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        assert!(validate_catalog(catalog()).is_ok());
        assert_eq!(catalog().len(), 6);
        assert!(catalog()[5].is_stop());
    }

    #[test]
    fn test_titles() {
        assert_eq!(DETENTS[0].title(), "Flank (28 kts)");
        assert_eq!(DETENTS[1].title(), "Ahead Full (25 kts)");
        assert_eq!(DETENTS[2].name(), "Std");
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(validate_catalog(&[]), Err(Error::Catalog(_))));
    }

    #[test]
    fn test_rejects_unordered_catalog() {
        let detents = [DETENTS[2], DETENTS[1], DETENTS[5]];
        assert!(validate_catalog(&detents).is_err());
    }

    #[test]
    fn test_rejects_missing_stop() {
        let detents = [DETENTS[0], DETENTS[1]];
        assert!(validate_catalog(&detents).is_err());
    }

    #[test]
    fn test_rejects_shared_token() {
        let mut twin = DETENTS[1];
        twin.id = "twin";
        twin.target_speed = 22.0;
        let detents = [DETENTS[1], twin, DETENTS[5]];
        assert!(validate_catalog(&detents).is_err());
    }
}
