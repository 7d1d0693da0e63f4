//! FFBot - fantasy football assistant bot
//!
//! Walks each user through the scripted dialog. State is read from the turn
//! store before every message and written back after it.

use std::sync::Arc;

use ffbot_core::{
    Bot, BotAction, BotConfig, BotEvent, BotManifest, ConversationState, Dialog, PlayerChooser,
    TurnState, TurnStore, UserProfile,
};
use rand::rngs::StdRng;

/// FFBot - answers user messages through the dialog state machine
pub struct FfBot {
    manifest: BotManifest,
    dialog: Dialog,
    store: Arc<dyn TurnStore>,
    rng: StdRng,
}

impl FfBot {
    /// Create FFBot from configuration
    pub fn new(config: &BotConfig, store: Arc<dyn TurnStore>, rng: StdRng) -> Self {
        let chooser = PlayerChooser::new(Arc::new(config.rankings()), config.bot.policy);
        Self {
            manifest: config.manifest(),
            dialog: Dialog::with_fillers(chooser, config.fillers()),
            store,
            rng,
        }
    }

    /// Read persisted state, falling back to fresh state on a miss or a store failure
    fn load_turn_state(&self, conversation_id: &str, user_id: &str) -> TurnState {
        let conversation = match self.store.load_conversation(conversation_id) {
            Ok(state) => state.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    conversation_id = %conversation_id,
                    error = %e,
                    "Failed to load conversation state, starting over"
                );
                ConversationState::default()
            }
        };

        let profile = match self.store.load_profile(user_id) {
            Ok(profile) => profile.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Failed to load user profile");
                UserProfile::default()
            }
        };

        TurnState {
            conversation,
            profile,
        }
    }

    fn save_turn_state(&self, conversation_id: &str, user_id: &str, state: &TurnState) {
        if let Err(e) = self
            .store
            .save_conversation(conversation_id, &state.conversation)
        {
            tracing::warn!(
                conversation_id = %conversation_id,
                error = %e,
                "Failed to save conversation state"
            );
        }
        if let Err(e) = self.store.save_profile(user_id, &state.profile) {
            tracing::warn!(user_id = %user_id, error = %e, "Failed to save user profile");
        }
    }

    fn on_message(&mut self, conversation_id: &str, user_id: &str, text: &str) -> Vec<BotAction> {
        let current = self.load_turn_state(conversation_id, user_id);
        let transition = self.dialog.step(&current, text, &mut self.rng);

        if let Some(fallback) = &transition.fallback {
            tracing::warn!(
                conversation_id = %conversation_id,
                stage = %current.conversation.stage,
                reason = %fallback,
                "Recovered with a fallback reply"
            );
        }

        tracing::info!(
            conversation_id = %conversation_id,
            from_stage = %current.conversation.stage,
            from_prompt = %current.conversation.prompt,
            to_stage = %transition.state.conversation.stage,
            to_prompt = %transition.state.conversation.prompt,
            "Turn handled"
        );

        self.save_turn_state(conversation_id, user_id, &transition.state);

        transition
            .replies
            .into_iter()
            .map(|content| BotAction::SendText {
                conversation_id: conversation_id.to_string(),
                content,
            })
            .collect()
    }
}

impl Bot for FfBot {
    fn manifest(&self) -> &BotManifest {
        &self.manifest
    }

    fn on_event(&mut self, event: &BotEvent) -> Vec<BotAction> {
        // Check capability
        if !self.should_receive(event) {
            return Vec::new();
        }

        match event {
            BotEvent::Message {
                conversation_id,
                user_id,
                text,
            } => self.on_message(conversation_id, user_id, text),
            BotEvent::ConversationStarted { conversation_id } => {
                // A reused id starts from the top of the script
                if let Err(e) = self
                    .store
                    .save_conversation(conversation_id, &ConversationState::default())
                {
                    tracing::warn!(
                        conversation_id = %conversation_id,
                        error = %e,
                        "Failed to reset conversation state"
                    );
                }
                Vec::new()
            }
        }
    }
}
