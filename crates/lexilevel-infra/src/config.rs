//! Configuration loader for Lexilevel.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`AppConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use lexilevel_types::config::{AppConfig, SESSION_TTL_HOURS, SessionConfig};

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`AppConfig::default()`].
/// - Unreadable or unparsable file: a warning is logged and defaults are used.
/// - `session.ttl_hours` outside [`SESSION_TTL_HOURS`]: a warning is logged
///   and the default session lifetime is used.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(mut config) => {
            if !config.session.ttl_in_range() {
                tracing::warn!(
                    ttl_hours = config.session.ttl_hours,
                    "session.ttl_hours in {} must be within {}..={}, using default",
                    config_path.display(),
                    SESSION_TTL_HOURS.start(),
                    SESSION_TTL_HOURS.end()
                );
                config.session = SessionConfig::default();
            }
            config
        }
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}
