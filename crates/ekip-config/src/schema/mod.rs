//! Configuration schema types for the ekip client.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod search;
mod server;

pub use logging::*;
pub use search::*;
pub use server::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EkipConfig {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}
