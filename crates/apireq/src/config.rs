use apireq_core::{FinalizeOptions, RequestDefaults};
use serde::{Deserialize, Serialize};

use crate::error::{ApireqError, Result};

/// apireq configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Values every new builder starts from
    pub defaults: RequestDefaults,

    /// Rules applied when finalizing
    pub validation: FinalizeOptions,

    /// Log level
    pub log_level: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            defaults: RequestDefaults::default(),
            validation: FinalizeOptions::default(),
            log_level: "info".to_string(),
        }
    }
}

impl RequestConfig {
    /// Parse from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ApireqError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load from configuration file
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RequestConfig::default();
        assert_eq!(config.defaults.method, "GET");
        assert_eq!(config.defaults.timeout, 5000);
        assert_eq!(config.validation.max_timeout, 60000);
        assert!(!config.validation.require_https);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_json_str() {
        let config = RequestConfig::from_json_str(
            r#"{
                "defaults": { "method": "POST", "headers": { "User-Agent": "MyApp/1.0" } },
                "validation": { "require_https": true, "max_timeout": 30000 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.defaults.method, "POST");
        assert_eq!(config.defaults.timeout, 5000);
        assert_eq!(config.defaults.headers["User-Agent"], "MyApp/1.0");
        assert!(config.validation.require_https);
        assert_eq!(config.validation.max_timeout, 30000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_json_str_rejects_malformed_input() {
        let result = RequestConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ApireqError::Config(_))));
    }
}
