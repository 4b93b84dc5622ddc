//! Environment variable overrides applied on top of the TOML file.

use tracing::{info, warn};

use crate::schema::{EkipConfig, LogLevel};

/// Overrides `server.base_url`.
pub const ENV_API_URL: &str = "EKIP_API_URL";
/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "EKIP_LOG_LEVEL";

/// Apply `EKIP_*` overrides from the process environment.
pub fn apply_env_overrides(config: &mut EkipConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using an arbitrary variable lookup.
pub fn apply_overrides_from(config: &mut EkipConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        info!("{ENV_API_URL} overrides server.base_url");
        config.server.base_url = url.trim().trim_end_matches('/').to_string();
    }

    if let Some(raw) = lookup(ENV_LOG_LEVEL) {
        match LogLevel::parse(&raw) {
            Some(level) => config.logging.level = level,
            None => warn!("ignoring {ENV_LOG_LEVEL}={raw:?}: unknown level"),
        }
    }
}
