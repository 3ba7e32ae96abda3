//! Layered application configuration
//!
//! Precedence, lowest first: built-in defaults, `application.yaml`,
//! `application-<profile>.yaml`, `PRODUCT__*` environment variables.

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use product_service::config::{Config as ProductServiceConfig, DatabaseConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "PRODUCT__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub product_service: ProductServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    pub fn figment(config_dir: &Path, profile: Option<&str>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(config_dir.join("application.yaml")));

        if let Some(profile) = profile {
            figment = figment.merge(Yaml::file(
                config_dir.join(format!("application-{profile}.yaml")),
            ));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(config_dir: &Path, profile: Option<&str>) -> Result<Self, figment::Error> {
        Self::figment(config_dir, profile).extract()
    }
}
