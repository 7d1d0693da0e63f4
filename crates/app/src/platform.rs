//! Platform paths and environment
//!
//! Resolves where the bot configuration lives and who the console user is.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use ffbot_core::{BotConfig, ConfigError};

/// Env var naming an explicit config file
pub const CONFIG_ENV: &str = "FFBOT_CONFIG";

const CONFIG_FILE: &str = "ffbot.toml";

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given through `FFBOT_CONFIG`
    Env(PathBuf),
    /// `ffbot.toml` in the platform config directory
    UserDir(PathBuf),
    /// No file; built-in defaults
    Builtin,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Env(p) => write!(f, "{} ({})", p.display(), CONFIG_ENV),
            ConfigSource::UserDir(p) => write!(f, "{}", p.display()),
            ConfigSource::Builtin => write!(f, "built-in defaults"),
        }
    }
}

impl ConfigSource {
    /// Pick the config source from an optional env override and the user config dir
    pub fn resolve(env_path: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        if let Some(path) = env_path {
            return ConfigSource::Env(path);
        }

        match user_dir.map(|dir| dir.join(CONFIG_FILE)) {
            Some(path) if path.exists() => ConfigSource::UserDir(path),
            _ => ConfigSource::Builtin,
        }
    }

    /// Detect the config source from the environment
    pub fn detect() -> Self {
        let env_path = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let user_dir = ProjectDirs::from("dev", "ffbot", "ffbot")
            .map(|dirs| dirs.config_dir().to_path_buf());
        Self::resolve(env_path, user_dir)
    }

    /// Load the configuration this source points at
    pub fn load(&self) -> Result<BotConfig, ConfigError> {
        match self {
            ConfigSource::Env(path) | ConfigSource::UserDir(path) => BotConfig::load(path),
            ConfigSource::Builtin => Ok(BotConfig::default()),
        }
    }
}

/// Id the console user is stored under
pub fn console_user_id() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "console-user".to_string())
}
