use crate::env::{flag, string_or};

#[derive(Clone, Debug)]
pub struct ObservabilityConfig {
    /// Prometheus metrics on `/metrics`; `OBSERVABILITY_ENABLED=false` turns it off
    pub enabled: bool,
    /// Default level for this service's own targets
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: "info".to_string(),
            log_dir: "storage/logs".to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: flag("OBSERVABILITY_ENABLED", defaults.enabled),
            log_level: string_or("LOG_LEVEL", &defaults.log_level),
            log_dir: string_or("LOG_DIR", &defaults.log_dir),
        }
    }
}
