//! Configuration types for the USSD session simulator.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Simulator configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Gateway settings
    pub gateway: GatewaySettings,
    /// Subscriber settings
    pub subscriber: SubscriberSettings,
}

impl SimulatorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: SimulatorConfig = serde_yaml::from_str(yaml)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.gateway.endpoint.trim().is_empty() {
            return Err(crate::Error::Config(
                "gateway.endpoint must not be empty".to_string(),
            ));
        }
        if self.gateway.timeout_ms == 0 {
            return Err(crate::Error::Config(
                "gateway.timeout_ms must be > 0".to_string(),
            ));
        }
        if self.subscriber.phone_number.trim().is_empty() {
            return Err(crate::Error::Config(
                "subscriber.phone_number must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    /// Endpoint URL receiving turn requests
    pub endpoint: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/api/ussd".to_string(),
            timeout_ms: 8000,
        }
    }
}

impl GatewaySettings {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Subscriber settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriberSettings {
    /// MSISDN used to populate the request's phoneNumber field
    pub phone_number: String,
}

impl Default for SubscriberSettings {
    fn default() -> Self {
        Self {
            phone_number: "+237650000001".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.gateway.endpoint, "http://localhost:8080/api/ussd");
        assert_eq!(config.gateway.timeout_ms, 8000);
        assert!(!config.subscriber.phone_number.is_empty());
    }

    #[test]
    fn test_config_validation() {
        let config = SimulatorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let mut config = SimulatorConfig::default();
        config.gateway.endpoint = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = SimulatorConfig::default();
        config.gateway.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_phone_number_rejected() {
        let mut config = SimulatorConfig::default();
        config.subscriber.phone_number = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
gateway:
  endpoint: "https://gw.example.net/api/ussd"
  timeout_ms: 12000

subscriber:
  phone_number: "+237699112233"
"#;

        let config = SimulatorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.gateway.endpoint, "https://gw.example.net/api/ussd");
        assert_eq!(config.gateway.timeout_ms, 12000);
        assert_eq!(config.gateway.timeout(), Duration::from_secs(12));
        assert_eq!(config.subscriber.phone_number, "+237699112233");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
gateway:
  endpoint: "https://gw.example.net/api/ussd"
"#;
        let config = SimulatorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.gateway.timeout_ms, 8000);
        assert_eq!(config.subscriber.phone_number, "+237650000001");
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(SimulatorConfig::from_yaml("gateway: [not, a, map]").is_err());
    }
}
