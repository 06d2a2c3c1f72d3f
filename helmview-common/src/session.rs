use zenoh::Session;

use crate::config::ZenohConfig;
use crate::error::{Error, Result};

/// Build the Zenoh configuration for a HelmView session.
pub fn zenoh_config(config: &ZenohConfig) -> Result<zenoh::Config> {
    let mode = match config.mode.as_str() {
        "client" | "peer" | "router" => format!("\"{}\"", config.mode),
        other => {
            return Err(Error::Config(format!(
                "Invalid Zenoh mode: '{}'. Expected 'client', 'peer', or 'router'",
                other
            )));
        }
    };

    let mut zenoh_config = zenoh::Config::default();
    zenoh_config
        .insert_json5("mode", &mode)
        .map_err(|e| Error::Config(format!("Failed to set mode: {}", e)))?;

    for (key, endpoints) in [
        ("connect/endpoints", &config.connect),
        ("listen/endpoints", &config.listen),
    ] {
        if endpoints.is_empty() {
            continue;
        }
        let json = serde_json::to_string(endpoints)?;
        zenoh_config
            .insert_json5(key, &json)
            .map_err(|e| Error::Config(format!("Failed to set {}: {}", key, e)))?;
    }

    Ok(zenoh_config)
}

/// Open a Zenoh session using the provided configuration.
pub async fn connect(config: &ZenohConfig) -> Result<Session> {
    let zenoh_config = zenoh_config(config)?;

    tracing::info!(
        mode = %config.mode,
        connect = ?config.connect,
        listen = ?config.listen,
        "Connecting to Zenoh"
    );

    let session = zenoh::open(zenoh_config).await?;

    tracing::info!(zid = %session.zid(), "Connected to Zenoh");

    Ok(session)
}
