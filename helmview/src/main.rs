//! HelmView - bridge dashboard with an engine order telegraph.
//!
//! Shows the ship's commanded speed on a telegraph flanked by a 0-30 knot
//! scale and keeps it in sync with the CST simulation over Zenoh.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use iced::application;

use helmview::{HelmConfig, HelmView};
use helmview_common::{catalog, init_tracing, validate_catalog};

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(about = "HelmView bridge dashboard")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Run against a simulated CST instead of Zenoh.
    #[arg(long)]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, source) = HelmConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;

    init_tracing(&config.logging, args.log_level.as_deref())?;

    match &source {
        Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
        None => tracing::info!("Using built-in configuration"),
    }

    validate_catalog(catalog()).context("Invalid detent catalog")?;
    let dimensions = config
        .dimensions
        .compile()
        .context("Invalid telegraph dimensions")?;

    tracing::info!(demo = args.demo, prefix = %config.cst.key_prefix, "Starting HelmView");

    let demo = args.demo;
    let window = (config.window.width, config.window.height);

    application(
        move || HelmView::boot(config.clone(), dimensions.clone(), demo),
        HelmView::update,
        HelmView::view,
    )
    .title(HelmView::title)
    .subscription(HelmView::subscription)
    .theme(HelmView::theme)
    .window_size(window)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["helmview"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.demo);
    }

    #[test]
    fn test_args_all_flags() {
        let args = Args::try_parse_from([
            "helmview",
            "--config",
            "bridge.json5",
            "--log-level",
            "debug",
            "--demo",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("bridge.json5")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.demo);
    }
}
