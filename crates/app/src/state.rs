//! Application state management

use std::sync::{Arc, Mutex};

use ffbot_core::{BotConfig, MemoryStore};

/// Reply queued for delivery to the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub conversation_id: String,
    pub content: String,
}

/// Main application state
pub struct AppState {
    pub config: BotConfig,
    pub store: Arc<MemoryStore>,
    /// Replies waiting to be printed, in send order
    pub outbox: Arc<Mutex<Vec<OutgoingMessage>>>,
}

impl AppState {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            store: Arc::new(MemoryStore::new()),
            outbox: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a reply for a conversation
    pub fn push_outgoing(&self, conversation_id: &str, content: String) {
        let msg = OutgoingMessage {
            conversation_id: conversation_id.to_string(),
            content,
        };
        match self.outbox.lock() {
            Ok(mut outbox) => outbox.push(msg),
            Err(poisoned) => {
                tracing::error!("Outbox mutex poisoned, recovering");
                poisoned.into_inner().push(msg);
            }
        }
    }

    /// Take every queued reply
    pub fn drain_outgoing(&self) -> Vec<OutgoingMessage> {
        match self.outbox.lock() {
            Ok(mut outbox) => std::mem::take(&mut *outbox),
            Err(poisoned) => {
                tracing::error!("Outbox mutex poisoned, recovering");
                std::mem::take(&mut *poisoned.into_inner())
            }
        }
    }
}
