//! Bot runtime - manages bot lifecycle and event dispatch
//!
//! Capability enforcement happens here. Bots interact with the host only
//! through the surface defined in ffbot_core::bot.

use std::collections::HashSet;
use std::sync::Arc;

use ffbot_core::{Bot, BotAction, BotCapability, BotEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ffbot::FfBot;
use crate::state::AppState;

/// Bot runtime - manages bots and dispatches events
pub struct BotRuntime {
    bots: Vec<Box<dyn Bot>>,
    state: Arc<AppState>,
}

impl BotRuntime {
    /// Create a new bot runtime with FFBot registered
    pub fn new(state: Arc<AppState>) -> Self {
        let mut runtime = Self::empty(state.clone());

        let ffbot = FfBot::new(&state.config, state.store.clone(), StdRng::from_entropy());
        runtime.register_bot(Box::new(ffbot));

        runtime
    }

    /// Create a runtime with no bots registered
    pub fn empty(state: Arc<AppState>) -> Self {
        Self {
            bots: Vec::new(),
            state,
        }
    }

    /// Register a bot
    pub fn register_bot(&mut self, bot: Box<dyn Bot>) {
        tracing::info!(
            bot_id = %bot.manifest().id,
            bot_name = %bot.manifest().name,
            bot_version = %bot.manifest().version,
            "Registered bot"
        );
        self.bots.push(bot);
    }

    /// Dispatch an event to all bots that can receive it
    pub fn dispatch(&mut self, event: &BotEvent) {
        // Collect all actions first, with each bot's capabilities for enforcement
        let mut all_actions: Vec<(String, HashSet<BotCapability>, BotAction)> = Vec::new();

        for bot in &mut self.bots {
            if !bot.should_receive(event) {
                continue;
            }

            let bot_id = bot.manifest().id.clone();
            let bot_caps: HashSet<BotCapability> =
                bot.manifest().capabilities.iter().copied().collect();
            let actions = bot.on_event(event);

            for action in actions {
                all_actions.push((bot_id.clone(), bot_caps.clone(), action));
            }
        }

        for (bot_id, bot_caps, action) in all_actions {
            self.execute_action(&bot_id, &bot_caps, &action);
        }
    }

    /// Execute a bot action with capability enforcement
    fn execute_action(&self, bot_id: &str, bot_caps: &HashSet<BotCapability>, action: &BotAction) {
        let required_cap = action.required_capability();
        if !bot_caps.contains(&required_cap) {
            tracing::warn!(
                bot_id = %bot_id,
                required = ?required_cap,
                "Bot attempted action without required capability - DENIED"
            );
            return;
        }

        match action {
            BotAction::SendText {
                conversation_id,
                content,
            } => {
                self.state.push_outgoing(conversation_id, content.clone());
                tracing::debug!(
                    bot_id = %bot_id,
                    conversation_id = %conversation_id,
                    "Bot sent text"
                );
            }
        }
    }

    /// Deliver one user message
    pub fn on_message(&mut self, conversation_id: &str, user_id: &str, text: &str) {
        let event = BotEvent::Message {
            conversation_id: conversation_id.to_string(),
            user_id: user_id.to_string(),
            text: text.to_string(),
        };

        self.dispatch(&event);
    }

    /// Notify bots that a conversation was opened
    pub fn on_conversation_started(&mut self, conversation_id: &str) {
        let event = BotEvent::ConversationStarted {
            conversation_id: conversation_id.to_string(),
        };
        self.dispatch(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffbot_core::{BotConfig, BotManifest};

    /// Bot that tries to talk without the SendText capability
    struct Rogue {
        manifest: BotManifest,
    }

    impl Bot for Rogue {
        fn manifest(&self) -> &BotManifest {
            &self.manifest
        }

        fn on_event(&mut self, event: &BotEvent) -> Vec<BotAction> {
            vec![BotAction::SendText {
                conversation_id: event.conversation_id().to_string(),
                content: "psst".to_string(),
            }]
        }
    }

    #[test]
    fn test_dispatch_queues_replies() {
        let state = Arc::new(AppState::new(BotConfig::default()));
        let mut runtime = BotRuntime::new(state.clone());

        runtime.on_message("c1", "u1", "hi");

        let out = state.drain_outgoing();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].conversation_id, "c1");
        assert_eq!(out[0].content, "Hello! Who are you?");
    }

    #[test]
    fn test_action_without_capability_is_denied() {
        let state = Arc::new(AppState::new(BotConfig::default()));
        let mut runtime = BotRuntime::empty(state.clone());
        runtime.register_bot(Box::new(Rogue {
            manifest: BotManifest {
                id: "rogue".to_string(),
                name: "Rogue".to_string(),
                version: "0.0.1".to_string(),
                capabilities: vec![BotCapability::ReceiveMessages],
            },
        }));

        runtime.on_message("c1", "u1", "hello");
        assert!(state.drain_outgoing().is_empty());
    }

    #[test]
    fn test_conversation_started_sends_nothing() {
        let state = Arc::new(AppState::new(BotConfig::default()));
        let mut runtime = BotRuntime::new(state.clone());

        runtime.on_conversation_started("c1");
        assert!(state.drain_outgoing().is_empty());
    }
}
