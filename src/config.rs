use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Model artifact configuration
    #[serde(default)]
    pub model: ModelConfig,

    /// Observability configuration
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: CLINIRISK)
            .add_source(
                config::Environment::with_prefix("CLINIRISK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Resolve the model artifact path for a service.
    ///
    /// Precedence: `MODEL_PATH` environment variable, then the config file,
    /// then the per-domain default.
    pub fn model_path(&self, default_path: &str) -> PathBuf {
        std::env::var("MODEL_PATH")
            .map(PathBuf::from)
            .ok()
            .or_else(|| self.model.path.clone())
            .unwrap_or_else(|| PathBuf::from(default_path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            model: ModelConfig::default(),
            observability: ObservabilityConfig {
                log_level: default_log_level(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the model artifact; falls back to the per-domain default
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        assert_eq!(default_port(), 7860);
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_model_path_falls_back_to_domain_default() {
        let config = Config::default();
        assert_eq!(
            config.model_path("model/diabetes_model.bin"),
            PathBuf::from("model/diabetes_model.bin")
        );
    }

    #[test]
    fn test_model_path_prefers_configured_value() {
        let config = Config {
            model: ModelConfig {
                path: Some(PathBuf::from("/opt/models/custom.bin")),
            },
            ..Config::default()
        };
        assert_eq!(
            config.model_path("model/diabetes_model.bin"),
            PathBuf::from("/opt/models/custom.bin")
        );
    }
}
