//! Configuration for the gateway connector.

use std::collections::HashMap;
use std::path::Path;

use blaze_common::GatewayIdentity;
use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Environment name the configuration was loaded for (e.g. "development").
    #[serde(default)]
    pub environment: String,
    /// Application identity presented to the gateway.
    pub mixin: GatewayIdentity,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Environment used when none is selected.
pub const DEFAULT_ENVIRONMENT: &str = "development";

impl Config {
    /// Load configuration for `environment` from `dir` and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (BLAZE__SECTION__KEY format)
    /// 2. `config.<environment>.toml` (if present)
    /// 3. `config.toml` (if present)
    /// 4. Built-in defaults
    pub fn load(dir: impl AsRef<Path>, environment: &str) -> Result<Self, ConfigError> {
        Self::load_with_vars(dir.as_ref(), environment, None)
    }

    fn load_with_vars(
        dir: &Path,
        environment: &str,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("logging.level", default_log_level())?
            .add_source(File::from(dir.join("config.toml")).required(false))
            .add_source(File::from(dir.join(format!("config.{}.toml", environment))).required(false))
            .add_source(
                Environment::with_prefix("BLAZE")
                    .separator("__")
                    .source(vars),
            )
            .set_override("environment", environment)?
            .build()?;

        config.try_deserialize()
    }

    /// Identity handed to the connector.
    pub fn identity(&self) -> GatewayIdentity {
        self.mixin.clone()
    }
}
