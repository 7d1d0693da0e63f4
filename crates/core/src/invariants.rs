//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{ConversationState, Prompt, Stage, UserProfile};

/// Validate that a conversation sits on a (stage, prompt) pair the dialog can produce
pub fn assert_conversation_invariants(state: &ConversationState) {
    debug_assert!(
        state.is_reachable(),
        "Conversation state ({}, {}) is not reachable",
        state.stage,
        state.prompt
    );
}

/// Validate that a conversation at the menu fork has a team name on file
pub fn assert_profile_invariants(state: &ConversationState, profile: &UserProfile) {
    if state.stage == Stage::Menu && state.prompt == Prompt::Fork {
        debug_assert!(
            profile.team_name.is_some(),
            "Conversation at the menu fork without a team name"
        );
    }
}
