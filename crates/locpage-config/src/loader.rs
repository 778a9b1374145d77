//! Configuration loading utilities

use crate::Config;
use locpage_common::Result as LocPageResult;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for locpage_common::LocPageError {
    fn from(err: ConfigError) -> Self {
        locpage_common::LocPageError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;

        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from the default locations
    ///
    /// Tries `LOCPAGE_CONFIG_PATH`, then `config.yaml` and `config.yml` in
    /// the working directory, and finally falls back to built-in defaults.
    /// Environment overrides apply in every case.
    pub fn load() -> LocPageResult<Config> {
        let config = if let Ok(config_path) = env::var("LOCPAGE_CONFIG_PATH") {
            debug!(path = %config_path, "loading configuration from LOCPAGE_CONFIG_PATH");
            Self::load_config(&config_path)?
        } else if Path::new("config.yaml").exists() {
            Self::load_config("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::load_config("config.yml")?
        } else {
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config
                .validate_all()
                .map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LocPageResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("LOCPAGE_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("LOCPAGE_PORT") {
            config.server.port = port.parse().map_err(|e| ConfigError::EnvParseError {
                var: "LOCPAGE_PORT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(dir) = env::var("LOCPAGE_LOCALES_DIR") {
            config.locales.dir = dir;
        }

        if let Ok(fallback) = env::var("LOCPAGE_FALLBACK_LOCALE") {
            config.locales.fallback = fallback;
        }

        if let Ok(dir) = env::var("LOCPAGE_TEMPLATES_DIR") {
            config.templates.dir = dir;
        }

        if let Ok(level) = env::var("LOCPAGE_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            r#"
server:
  host: 0.0.0.0
  port: 3000
locales:
  dir: my-locales
  fallback: fr
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_config(&config_path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.locales.dir, "my-locales");
        assert_eq!(config.locales.fallback, "fr");
        // Unspecified sections keep their defaults
        assert_eq!(config.templates.dir, "templates");
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "server: [not, a, mapping").unwrap();

        let result = ConfigLoader::load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_rejects_invalid_fallback() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "locales:\n  fallback: '!!'\n").unwrap();

        let result = ConfigLoader::load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ConfigLoader::load_config("/nonexistent/config.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_env_override_applies() {
        // A value no other test asserts against, in case it leaks into a
        // parallel test's load
        env::set_var("LOCPAGE_LOG_LEVEL", "debug");
        let mut config = Config::default();
        ConfigLoader::apply_env_overrides(&mut config).unwrap();
        env::remove_var("LOCPAGE_LOG_LEVEL");

        assert_eq!(config.logging.level, "debug");
    }
}
