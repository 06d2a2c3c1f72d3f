//! View components for the HelmView application.

pub mod components;
pub mod dashboard;
pub mod telegraph;
pub mod theme;
