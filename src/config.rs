//! Dashboard Configuration
//! Runtime settings with environment-variable overrides.

/// Settings consulted by the loading pipeline. Defaults match the hosted
/// deployment; `from_env` lets operators override them per process.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Upper bound for files loaded from disk, in megabytes.
    pub max_file_size_mb: u64,
    /// Rows sampled per column when probing for date-like values.
    pub datetime_sample_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            datetime_sample_rows: 10,
        }
    }
}

impl DashboardConfig {
    /// Load configuration, applying `MAX_FILE_SIZE_MB` from the environment
    /// when present and parseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("MAX_FILE_SIZE_MB") {
            if let Ok(limit) = raw.parse() {
                config.max_file_size_mb = limit;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.max_file_size_mb, 100);
        assert_eq!(config.datetime_sample_rows, 10);
    }
}
