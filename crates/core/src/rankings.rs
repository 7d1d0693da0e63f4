//! Static player ranking tables
//!
//! Two disjoint pools of full player name -> rank. Built once at startup and
//! shared read-only (behind an `Arc`) by every conversation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Named ranking pool, consulted in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingPool {
    Flex,
    Quarterback,
}

impl RankingPool {
    pub const LOOKUP_ORDER: [RankingPool; 2] = [RankingPool::Flex, RankingPool::Quarterback];
}

impl std::fmt::Display for RankingPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingPool::Flex => write!(f, "flex"),
            RankingPool::Quarterback => write!(f, "quarterback"),
        }
    }
}

/// Immutable player rankings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRankings {
    #[serde(default)]
    flex: HashMap<String, u32>,
    #[serde(default)]
    quarterback: HashMap<String, u32>,
}

impl PlayerRankings {
    /// Build rankings from explicit pool tables
    ///
    /// Names are matched exactly (case-sensitive). A name may live in only
    /// one pool.
    pub fn new(
        flex: HashMap<String, u32>,
        quarterback: HashMap<String, u32>,
    ) -> Result<Self, ConfigError> {
        let rankings = Self { flex, quarterback };
        rankings.validate()?;
        Ok(rankings)
    }

    /// Rankings shipped with the bot
    pub fn builtin() -> Self {
        let flex = [
            ("Todd Gurley", 1),
            ("Kareem Hunt", 2),
            ("Saquon Barkley", 3),
            ("Rashaad Penny", 132),
        ];
        let quarterback = [
            ("Patrick Mahomes", 1),
            ("Aaron Rodgers", 2),
            ("Kirk Cousins", 3),
            ("Nathan Peterman", 32),
        ];

        Self {
            flex: flex.iter().map(|(n, r)| (n.to_string(), *r)).collect(),
            quarterback: quarterback.iter().map(|(n, r)| (n.to_string(), *r)).collect(),
        }
    }

    /// Parse rankings from TOML with `[flex]` and `[quarterback]` tables
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let rankings: PlayerRankings = toml::from_str(content)?;
        rankings.validate()?;
        Ok(rankings)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = self.flex.keys().find(|n| self.quarterback.contains_key(*n)) {
            return Err(ConfigError::DuplicatePlayer(name.clone()));
        }
        Ok(())
    }

    fn table(&self, pool: RankingPool) -> &HashMap<String, u32> {
        match pool {
            RankingPool::Flex => &self.flex,
            RankingPool::Quarterback => &self.quarterback,
        }
    }

    /// Rank of a player within one pool
    pub fn rank(&self, pool: RankingPool, name: &str) -> Option<u32> {
        self.table(pool).get(name).copied()
    }

    /// First pool (in lookup order) that ranks both players, with their ranks
    pub fn shared_pool(&self, first: &str, second: &str) -> Option<(RankingPool, u32, u32)> {
        RankingPool::LOOKUP_ORDER.into_iter().find_map(|pool| {
            let a = self.rank(pool, first)?;
            let b = self.rank(pool, second)?;
            Some((pool, a, b))
        })
    }

    /// Number of ranked players across both pools
    pub fn len(&self) -> usize {
        self.flex.len() + self.quarterback.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
