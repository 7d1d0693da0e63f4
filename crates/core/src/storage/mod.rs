//! Turn-state storage for FFBot
//!
//! The dialog itself never touches storage. Hosts read state through a
//! [`TurnStore`] before each turn and write it back afterwards.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use serde_json::Value as RawValue;
pub use traits::TurnStore;

/// Storage key for a conversation's dialog position
pub fn conversation_key(conversation_id: &str) -> String {
    format!("conversation/{}", conversation_id)
}

/// Storage key for a user's profile
pub fn profile_key(user_id: &str) -> String {
    format!("user/{}", user_id)
}
