//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Locale catalog configuration
    pub locales: LocalesConfig,

    /// Template configuration
    pub templates: TemplatesConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server binds to
    #[validate(length(min = 1, message = "Bind host cannot be empty"))]
    pub host: String,

    /// Port the server listens on
    #[validate(range(min = 1, message = "Port must be non-zero"))]
    pub port: u16,
}

/// Locale catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LocalesConfig {
    /// Directory containing one `<code>.json` catalog file per locale
    #[validate(length(min = 1, message = "Locales directory cannot be empty"))]
    pub dir: String,

    /// Locale served when a request asks for an unsupported one
    #[validate(custom(function = "crate::validation::validate_locale_code", message = "Fallback locale must be a valid locale code"))]
    pub fallback: String,
}

/// Template configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory containing the HTML templates
    #[validate(length(min = 1, message = "Templates directory cannot be empty"))]
    pub dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug")
    #[validate(custom(function = "crate::validation::validate_log_level", message = "Invalid log level"))]
    pub level: String,

    /// Whether to emit JSON-formatted log records
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            locales: LocalesConfig::default(),
            templates: TemplatesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            dir: "locales".to_string(),
            fallback: "en".to_string(),
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: "templates".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.server.validate()?;
        self.locales.validate()?;
        self.templates.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
