//! Admin Configuration
//!
//! Tunables shared by every view. Missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Storage key holding JSON overrides for [`AdminConfig`]
pub const CONFIG_KEY: &str = "admin-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Rows per page in every list view
    pub page_size: usize,
    /// Storage key for the auth token
    pub token_key: String,
    /// Status assigned to imported rows without one
    pub default_status: String,
    /// chrono pattern used for display and export
    pub date_format: String,
    /// How long the import error banner stays up
    pub banner_timeout_ms: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            token_key: "token".to_string(),
            default_status: crate::csv_io::DEFAULT_STATUS.to_string(),
            date_format: "%b %d, %Y".to_string(),
            banner_timeout_ms: 5000,
        }
    }
}

impl AdminConfig {
    /// Parse JSON overrides; a zero page size is bumped to 1
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: AdminConfig = serde_json::from_str(json)?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }
}
