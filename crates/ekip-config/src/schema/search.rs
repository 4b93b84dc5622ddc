//! Search defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Department sent as `department_filter` with every search unless the
    /// user changes it during the session.
    pub department_filter: Option<String>,
}
