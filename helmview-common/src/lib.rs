//! HelmView Common Library
//!
//! Geometry and shared types behind the HelmView engine order telegraph:
//!
//! - [`detent`] - The ordered detent catalog (Flank down to Stop)
//! - [`length`] - CSS-like length expressions and the [`Viewport`]
//! - [`dimension`] - The [`DimensionProvider`] capability and its token table
//! - [`layout`] - Per-detent pixel heights, stack height and baseline
//! - [`classifier`] - Nearest-detent classification of a speed
//! - [`fill`] - Rail gauge fill height
//! - [`ticks`] - The 0..10 rail scale
//! - [`telegraph`] - The control model composing all of the above
//! - [`speed`] - Commanded speed clamping and input parsing
//! - [`cst`] - CST value channel keys and payloads
//! - [`serialization`] - JSON/CBOR encoding and decoding
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`session`] - Zenoh session management
//! - [`error`] - Error types

pub mod classifier;
pub mod config;
pub mod cst;
pub mod detent;
pub mod dimension;
pub mod error;
pub mod fill;
pub mod layout;
pub mod length;
pub mod serialization;
pub mod session;
pub mod speed;
pub mod telegraph;
pub mod ticks;

// Re-export commonly used types at the crate root
pub use classifier::classify;
pub use config::{CstConfig, LogFormat, LoggingConfig, ZenohConfig, load_config, parse_config};
pub use cst::{CstKeys, CstValue, decode_value, encode_desired_speed};
pub use detent::{DETENTS, Detent, catalog, validate_catalog};
pub use dimension::{DimensionConfig, DimensionProvider, TokenDimensions};
pub use error::{Error, Result};
pub use fill::fill;
pub use layout::{ResolvedLayout, resolve};
pub use length::{LengthExpr, Viewport};
pub use serialization::{Format, decode, decode_auto, encode};
pub use session::connect;
pub use speed::{MAX_SPEED, clamp_speed, format_speed, parse_speed_input};
pub use telegraph::{ActiveState, Telegraph, TelegraphFrame};
pub use ticks::{TICK_COUNT, Tick, ticks};

/// Initialize tracing with the given configuration.
///
/// The filter comes from `level_override` (the `--log-level` flag) when set,
/// then `RUST_LOG`, then the configured level.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// # Example
///
/// ```ignore
/// use helmview_common::{LoggingConfig, LogFormat, init_tracing};
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Json,
/// };
/// init_tracing(&config, Some("debug"))?;
/// ```
pub fn init_tracing(config: &LoggingConfig, level_override: Option<&str>) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match level_override {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level)),
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    result.map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))
}
