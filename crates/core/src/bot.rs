//! Bot system types
//!
//! The surface a host sees: events go in, actions come out. Hosts never
//! touch the dialog directly.

use serde::{Deserialize, Serialize};

/// Bot capabilities - what a bot is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotCapability {
    /// Receive user text messages
    ReceiveMessages,
    /// Send text replies
    SendText,
}

/// Bot manifest - describes a bot's identity and capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotManifest {
    /// Unique identifier for this bot
    pub id: String,
    /// Display name
    pub name: String,
    /// Version string
    pub version: String,
    /// Declared capabilities
    pub capabilities: Vec<BotCapability>,
}

impl BotManifest {
    /// Manifest for a conversational bot that reads and answers messages
    pub fn ffbot(id: &str, name: &str, version: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            capabilities: vec![BotCapability::ReceiveMessages, BotCapability::SendText],
        }
    }
}

/// Events that bots can receive
#[derive(Debug, Clone)]
pub enum BotEvent {
    /// A user sent a text message
    Message {
        conversation_id: String,
        user_id: String,
        text: String,
    },
    /// A new conversation was opened; no user text yet
    ConversationStarted { conversation_id: String },
}

impl BotEvent {
    /// Get the capability required to receive this event
    pub fn required_capability(&self) -> BotCapability {
        match self {
            BotEvent::Message { .. } | BotEvent::ConversationStarted { .. } => {
                BotCapability::ReceiveMessages
            }
        }
    }

    pub fn conversation_id(&self) -> &str {
        match self {
            BotEvent::Message {
                conversation_id, ..
            }
            | BotEvent::ConversationStarted { conversation_id } => conversation_id,
        }
    }
}

/// Actions a bot can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotAction {
    /// Send a text reply to a conversation
    SendText {
        conversation_id: String,
        content: String,
    },
}

impl BotAction {
    /// Get the capability required to emit this action
    pub fn required_capability(&self) -> BotCapability {
        match self {
            BotAction::SendText { .. } => BotCapability::SendText,
        }
    }
}

/// Trait for bot implementations
pub trait Bot: Send + Sync {
    /// Get the bot's manifest
    fn manifest(&self) -> &BotManifest;

    /// Handle an event and return any actions
    fn on_event(&mut self, event: &BotEvent) -> Vec<BotAction>;

    /// Check if this bot has a capability
    fn has_capability(&self, cap: BotCapability) -> bool {
        self.manifest().capabilities.contains(&cap)
    }

    /// Check if this bot should receive an event
    fn should_receive(&self, event: &BotEvent) -> bool {
        self.has_capability(event.required_capability())
    }

    /// Check if this bot can emit an action
    fn can_emit(&self, action: &BotAction) -> bool {
        self.has_capability(action.required_capability())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mute {
        manifest: BotManifest,
    }

    impl Bot for Mute {
        fn manifest(&self) -> &BotManifest {
            &self.manifest
        }

        fn on_event(&mut self, _event: &BotEvent) -> Vec<BotAction> {
            Vec::new()
        }
    }

    #[test]
    fn test_capability_checks() {
        let bot = Mute {
            manifest: BotManifest {
                id: "mute".to_string(),
                name: "Mute".to_string(),
                version: "0.0.1".to_string(),
                capabilities: vec![BotCapability::ReceiveMessages],
            },
        };
        let event = BotEvent::ConversationStarted {
            conversation_id: "c1".to_string(),
        };
        let action = BotAction::SendText {
            conversation_id: "c1".to_string(),
            content: "hi".to_string(),
        };

        assert!(bot.should_receive(&event));
        assert!(!bot.can_emit(&action));
        assert_eq!(event.conversation_id(), "c1");
    }

    #[test]
    fn test_ffbot_manifest_capabilities() {
        let manifest = BotManifest::ffbot("ffbot", "FFBot", "0.1.0");
        assert!(manifest.capabilities.contains(&BotCapability::ReceiveMessages));
        assert!(manifest.capabilities.contains(&BotCapability::SendText));
    }
}
