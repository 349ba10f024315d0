//! API configuration

use serde::Deserialize;

use core_kernel::{CoreError, Timezone};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// JSON reference data document; the built-in tables are used when unset
    pub reference_data_path: Option<String>,
    /// Days between invoice date and due date
    pub due_days: u32,
    /// Timezone invoices are dated in
    pub timezone: Timezone,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            reference_data_path: None,
            due_days: 0,
            timezone: Timezone::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Rejects settings the server cannot start with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.host.trim().is_empty() {
            return Err(CoreError::configuration("host must not be empty"));
        }
        if self.port == 0 {
            return Err(CoreError::configuration("port must not be 0"));
        }
        if let Some(path) = &self.reference_data_path {
            if path.trim().is_empty() {
                return Err(CoreError::configuration("reference_data_path is set but empty"));
            }
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.timezone.name(), "Asia/Kolkata");
        assert_eq!(config.due_days, 0);
        assert!(config.reference_data_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unusable_settings() {
        let no_port = ApiConfig { port: 0, ..ApiConfig::default() };
        assert!(matches!(no_port.validate(), Err(CoreError::Configuration(_))));

        let blank_path = ApiConfig {
            reference_data_path: Some("  ".to_string()),
            ..ApiConfig::default()
        };
        assert!(blank_path.validate().is_err());
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: ApiConfig = config::Config::builder()
            .set_override("port", 9090)
            .unwrap()
            .set_override("timezone", "Europe/Berlin")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.timezone.name(), "Europe/Berlin");
        assert_eq!(config.host, "0.0.0.0");
    }
}
