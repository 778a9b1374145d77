//! Configuration management for the locpage server
//!
//! Configuration is read from a YAML file (`config.yaml` by default, or the
//! path in `LOCPAGE_CONFIG_PATH`), with individual settings overridable
//! through `LOCPAGE_*` environment variables. The final configuration is
//! validated before use.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, LocalesConfig, LoggingConfig, ServerConfig, TemplatesConfig};
