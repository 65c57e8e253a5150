use crate::error::GateError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration.
///
/// Sources, later ones winning:
/// - built-in defaults
/// - `config.toml` (or the file named by `PORTRAIT_CONFIG`)
/// - environment variables prefixed `PORTRAIT_`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    #[serde(default)]
    pub pictures: Vec<PictureSeed>,
}

/// A picture to place in the store at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureSeed {
    pub id: i64,
    pub name: String,
    pub path: PathBuf,
    /// Username this picture is shown to after login.
    #[serde(default)]
    pub owner: Option<String>,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:portrait.db".to_string(),
            loglevel: "info".to_string(),
            pictures: Vec::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, GateError> {
        let path = std::env::var("PORTRAIT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        Ok(Self::figment(&path).extract()?)
    }

    fn figment(path: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("PORTRAIT_").ignore(&["config"]))
    }
}
