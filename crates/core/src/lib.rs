//! FFBot Core Library
//!
//! Dialog state machine, player chooser, ranking tables, and the bot event
//! surface for the FFBot fantasy football assistant.

pub mod bot;
pub mod chooser;
pub mod config;
pub mod dialog;
pub mod error;
pub mod invariants;
pub mod models;
pub mod rankings;
pub mod storage;

pub use bot::{Bot, BotAction, BotCapability, BotEvent, BotManifest};
pub use chooser::{split_players, PlayerChooser, SelectionPolicy};
pub use config::{BotConfig, ConfigError};
pub use dialog::{Dialog, Fallback, Transition, TurnState};
pub use error::{ChooserError, Error, Result, UnrecognizedMenuChoice};
pub use models::*;
pub use rankings::{PlayerRankings, RankingPool};
pub use storage::{MemoryStore, TurnStore};
