//! Configuration loader
//!
//! Handles loading configuration from defaults, an optional TOML file, and
//! environment variables, using Figment for source merging.

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME};
use crate::logging::parse_log_level;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix, nested keys split on `__`
    ///    (e.g. `TASKBOX_SERVER__PORT`)
    /// 4. Plain `DATABASE_URL` / `JWT_SECRET` variables
    ///
    /// # Errors
    /// `Error::Configuration` when a source fails to parse or the merged
    /// result is invalid (missing database URL, unknown log level).
    pub fn load(&self) -> taskbox_domain::Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                figment = figment.merge(Toml::file(default_path));
                info!("Configuration loaded from {}", default_path.display());
            }
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let mut app_config: AppConfig = figment.extract().map_err(|e| {
            taskbox_domain::Error::configuration_with_source("Failed to extract configuration", e)
        })?;

        // The plain deployment variables win over everything else.
        if let Ok(url) = env::var("DATABASE_URL") {
            app_config.database.url = url;
        }
        if let Ok(secret) = env::var("JWT_SECRET") {
            app_config.auth.jwt_secret = secret;
        }

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Validate the merged configuration
    fn validate_config(&self, config: &AppConfig) -> taskbox_domain::Result<()> {
        if config.database.url.is_empty() {
            return Err(taskbox_domain::Error::configuration(
                "database.url is required; set DATABASE_URL or database.url in the config file",
            ));
        }
        if config.database.max_connections == 0 {
            return Err(taskbox_domain::Error::configuration(
                "database.max_connections must be at least 1",
            ));
        }
        parse_log_level(&config.logging.level)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
