//! Storage repository traits
//!
//! These traits define the storage interface, allowing for different
//! implementations (in-memory, mock, future durable backend).

use crate::error::Result;
use crate::models::{ConversationState, UserProfile};

/// Per-conversation and per-user state persistence
pub trait TurnStore: Send + Sync {
    /// Load a conversation's state, if one was saved
    fn load_conversation(&self, conversation_id: &str) -> Result<Option<ConversationState>>;

    /// Save a conversation's state
    fn save_conversation(&self, conversation_id: &str, state: &ConversationState) -> Result<()>;

    /// Load a user's profile, if one was saved
    fn load_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Save a user's profile
    fn save_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()>;
}
