//! Query engine configuration loaded from environment variables.

/// Tunables for the query engine.
///
/// Reads from environment variables:
/// - `RECENT_QUERY_LIMIT` — default "recent" result count (default: `30`)
/// - `CORRELATION_ATTRIBUTE` — attribute scanned by correlation queries
///   (default: `"marketing_id"`)
///
/// Requested recency limits are clamped into
/// `[recent_limit_min, recent_limit_max]` rather than rejected.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub default_recent_limit: usize,
    pub recent_limit_min: usize,
    pub recent_limit_max: usize,
    pub correlation_attribute: String,
}

impl QueryConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_recent_limit: std::env::var("RECENT_QUERY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_recent_limit),
            correlation_attribute: std::env::var("CORRELATION_ATTRIBUTE")
                .unwrap_or(defaults.correlation_attribute),
            ..defaults
        }
    }

    /// Clamps a requested limit into the configured bounds.
    pub fn clamp_limit(&self, requested: usize) -> usize {
        requested.clamp(self.recent_limit_min, self.recent_limit_max)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_recent_limit: 30,
            recent_limit_min: 1,
            recent_limit_max: 100,
            correlation_attribute: "marketing_id".to_string(),
        }
    }
}
