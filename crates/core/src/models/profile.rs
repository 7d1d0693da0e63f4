//! User profile model

use serde::{Deserialize, Serialize};

/// What the bot has learned about a user, keyed by user id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
}
