//! ekip client configuration.
//!
//! TOML-based configuration with environment overrides and validation.
//! All config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = ekip_config::load_config(None).expect("failed to load config");
//! println!("{}", config.server.base_url);
//! ```

pub mod overrides;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use overrides::apply_env_overrides;
pub use schema::{EkipConfig, LogLevel};

use ekip_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created on first use. Environment overrides are
/// applied last and the merged result is validated.
pub fn load_config(path: Option<&Path>) -> Result<EkipConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}
