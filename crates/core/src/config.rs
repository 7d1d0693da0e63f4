//! Bot configuration schema and loader
//!
//! Defines the TOML configuration format for the bot. Everything is
//! optional; a missing file means built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bot::BotManifest;
use crate::chooser::SelectionPolicy;
use crate::rankings::PlayerRankings;

/// Small-talk lines used when no sub-topic is active
pub const DEFAULT_FILLERS: [&str; 4] = [
    "Interesting, tell me more",
    "Why is that?",
    "How cool",
    "When did that start?",
];

/// Configuration loaded from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot identity and chooser policy
    #[serde(default)]
    pub bot: BotMeta,
    /// Replacement small-talk lines
    #[serde(default)]
    pub fillers: Option<Vec<String>>,
    /// Replacement ranking tables
    #[serde(default)]
    pub rankings: Option<PlayerRankings>,
}

/// Bot metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotMeta {
    /// Unique identifier
    #[serde(default = "default_id")]
    pub id: String,
    /// Display name
    #[serde(default = "default_name")]
    pub name: String,
    /// Semantic version
    #[serde(default = "default_version")]
    pub version: String,
    /// Player selection policy for the WDIS topic
    #[serde(default)]
    pub policy: SelectionPolicy,
}

fn default_id() -> String {
    "ffbot".to_string()
}

fn default_name() -> String {
    "FFBot".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for BotMeta {
    fn default() -> Self {
        Self {
            id: default_id(),
            name: default_name(),
            version: default_version(),
            policy: SelectionPolicy::default(),
        }
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Player '{0}' appears in more than one ranking pool")]
    DuplicatePlayer(String),
    #[error("Filler list must not be empty")]
    EmptyFillers,
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

impl BotConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration directly from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: BotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(fillers) = &self.fillers {
            if fillers.iter().all(|f| f.trim().is_empty()) {
                return Err(ConfigError::EmptyFillers);
            }
        }
        if let Some(rankings) = &self.rankings {
            rankings.validate()?;
        }
        Ok(())
    }

    /// Effective ranking tables
    pub fn rankings(&self) -> PlayerRankings {
        self.rankings.clone().unwrap_or_else(PlayerRankings::builtin)
    }

    /// Effective small-talk lines
    pub fn fillers(&self) -> Vec<String> {
        match &self.fillers {
            Some(lines) => lines
                .iter()
                .filter(|l| !l.trim().is_empty())
                .cloned()
                .collect(),
            None => DEFAULT_FILLERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Runtime manifest describing this bot
    pub fn manifest(&self) -> BotManifest {
        BotManifest::ffbot(&self.bot.id, &self.bot.name, &self.bot.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rankings::RankingPool;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BotConfig::from_toml("").unwrap();
        assert_eq!(config.bot.id, "ffbot");
        assert_eq!(config.bot.name, "FFBot");
        assert_eq!(config.bot.policy, SelectionPolicy::Ranked);
        assert_eq!(config.fillers().len(), DEFAULT_FILLERS.len());
        assert_eq!(config.rankings(), PlayerRankings::builtin());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
fillers = ["Go on", "Huh"]

[bot]
id = "ffbot-staging"
name = "FFBot Staging"
version = "0.2.0"
policy = "random"

[rankings.flex]
"Justin Jefferson" = 1

[rankings.quarterback]
"Jalen Hurts" = 2
"#;
        let config = BotConfig::from_toml(toml).unwrap();
        assert_eq!(config.bot.id, "ffbot-staging");
        assert_eq!(config.bot.policy, SelectionPolicy::Random);
        assert_eq!(config.fillers(), vec!["Go on".to_string(), "Huh".to_string()]);

        let rankings = config.rankings();
        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings.rank(RankingPool::Quarterback, "Jalen Hurts"), Some(2));
        assert_eq!(rankings.rank(RankingPool::Flex, "Todd Gurley"), None);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let toml = r#"
[bot]
policy = "vibes"
"#;
        assert!(matches!(
            BotConfig::from_toml(toml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_blank_fillers_rejected() {
        assert!(matches!(
            BotConfig::from_toml("fillers = []"),
            Err(ConfigError::EmptyFillers)
        ));
        assert!(matches!(
            BotConfig::from_toml(r#"fillers = ["  "]"#),
            Err(ConfigError::EmptyFillers)
        ));
    }

    #[test]
    fn test_overlapping_pools_rejected() {
        let toml = r#"
[rankings.flex]
"Taysom Hill" = 40

[rankings.quarterback]
"Taysom Hill" = 30
"#;
        assert!(matches!(
            BotConfig::from_toml(toml),
            Err(ConfigError::DuplicatePlayer(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bot]\nname = \"File Bot\"").unwrap();

        let config = BotConfig::load(file.path()).unwrap();
        assert_eq!(config.bot.name, "File Bot");
        assert_eq!(config.manifest().name, "File Bot");
    }

    #[test]
    fn test_example_config_matches_builtin() {
        let config = BotConfig::from_toml(include_str!("../../../ffbot.example.toml")).unwrap();
        assert_eq!(config.rankings(), PlayerRankings::builtin());
        assert_eq!(config.fillers().len(), DEFAULT_FILLERS.len());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            BotConfig::load(&path),
            Err(ConfigError::NotFound(p)) if p == path
        ));
    }
}
