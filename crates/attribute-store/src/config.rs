//! Store client configuration loaded from environment variables.

/// Connection settings for the read-optimized table.
///
/// Reads from environment variables:
/// - `NOTIFICATION_TABLE_NAME` — table name (default: `"notification-records"`)
/// - `STORE_REGION` — store region (default: `"ap-southeast-1"`)
/// - `STORE_ENDPOINT` — endpoint override for local emulator testing
///   (default: none)
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub table_name: String,
    pub region: String,
    pub endpoint: Option<String>,
}

impl StoreConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            table_name: std::env::var("NOTIFICATION_TABLE_NAME")
                .unwrap_or_else(|_| "notification-records".to_string()),
            region: std::env::var("STORE_REGION")
                .unwrap_or_else(|_| "ap-southeast-1".to_string()),
            endpoint: std::env::var("STORE_ENDPOINT").ok(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table_name: "notification-records".to_string(),
            region: "ap-southeast-1".to_string(),
            endpoint: None,
        }
    }
}
