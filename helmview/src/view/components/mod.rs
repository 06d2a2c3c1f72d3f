//! Reusable widgets for the bridge dashboard.

pub mod progress_bar;
pub mod rail_gauge;
pub mod sparkline;
pub mod stat;
pub mod status_led;

pub use progress_bar::{ProgressBar, ProgressBarStyle};
pub use rail_gauge::{RAIL_WIDTH, RailGauge, RailSide};
pub use sparkline::Sparkline;
pub use stat::Stat;
pub use status_led::{StatusLed, StatusLedState};
