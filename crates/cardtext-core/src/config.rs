use std::path::Path;

use anyhow::Result;
use config::{Config, Map};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};
use crate::types::Locale;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub locale: Locale,
}

impl Settings {
    /// ## Summary
    /// Builds `Settings` from defaults, an optional TOML file and `CARDTEXT_*`
    /// environment variables. Later sources take precedence.
    ///
    /// `file` replaces the default `cardtext.toml` lookup; an explicit file must exist.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(file: Option<&str>) -> Result<Self> {
        Self::load_with_env(file, None)
    }

    /// ## Summary
    /// Same as [`Settings::load`], reading `CARDTEXT_*` variables from `env`
    /// instead of the process environment when given.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_with_env(file: Option<&str>, env: Option<Map<String, String>>) -> Result<Self> {
        let file_source = match file {
            Some(path) => config::File::with_name(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        Ok(Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("render.locale", Locale::default().as_str())?
            // TOML file
            .add_source(file_source)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("_")
                    .ignore_empty(true)
                    .source(env),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
            render: RenderConfig {
                locale: Locale::default(),
            },
        }
    }
}

/// ## Summary
/// Returns `path` as the string form the config loader expects.
///
/// ## Errors
/// Returns an error if the path is not valid UTF-8.
pub fn config_path_str(path: &Path) -> CoreResult<&str> {
    path.to_str().ok_or_else(|| {
        CoreError::InvalidInput(format!("config path is not UTF-8: {}", path.display()))
    })
}

/// ## Summary
/// Loads configuration from the environment, an optional `.env` file and the
/// config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&str>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(file)?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
