//! Application configuration types.
//!
//! `AppConfig` represents the `config.toml` in the data directory. Every
//! field has a default so a missing or partial file is fine.

use std::ops::RangeInclusive;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Accepted session lifetimes, in hours: one hour up to ten years.
pub const SESSION_TTL_HOURS: RangeInclusive<i64> = 1..=24 * 365 * 10;

/// Top-level configuration for Lexilevel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub identity: IdentityConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Identity provider endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the Identity Toolkit REST API.
    #[serde(default = "default_identity_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the web API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// HTTP timeout for provider calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_identity_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

fn default_api_key_env() -> String {
    "LEXILEVEL_IDENTITY_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: default_identity_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Login session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in hours.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
}

fn default_ttl_hours() -> i64 {
    24 * 7
}

impl SessionConfig {
    /// Whether `ttl_hours` lies in [`SESSION_TTL_HOURS`].
    pub fn ttl_in_range(&self) -> bool {
        SESSION_TTL_HOURS.contains(&self.ttl_hours)
    }

    /// Session lifetime. Out-of-range values yield the default lifetime.
    pub fn ttl(&self) -> Duration {
        let hours = if self.ttl_in_range() {
            self.ttl_hours
        } else {
            default_ttl_hours()
        };
        Duration::try_hours(hours).unwrap_or_else(|| Duration::days(7))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}
