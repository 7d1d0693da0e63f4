//! Conversation stage and prompt model

use serde::{Deserialize, Serialize};

use super::MenuChoice;

/// Phase of the scripted conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Collecting the user's name
    #[serde(rename = "intro")]
    Intro,
    /// Collecting the team name, then offering the options menu
    #[serde(rename = "menu")]
    Menu,
    /// "Who do I start?" - waiting for two player names
    #[serde(rename = "WDIS")]
    Wdis,
    #[serde(rename = "Complaint")]
    Complaint,
    #[serde(rename = "Question")]
    Question,
    /// Small talk
    #[serde(rename = "Lonely")]
    Lonely,
    /// Nothing in progress; a sub-topic finished
    #[serde(rename = "other")]
    Other,
}

impl Stage {
    /// Persisted token for this stage
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Intro => "intro",
            Stage::Menu => "menu",
            Stage::Wdis => "WDIS",
            Stage::Complaint => "Complaint",
            Stage::Question => "Question",
            Stage::Lonely => "Lonely",
            Stage::Other => "other",
        }
    }
}

impl From<MenuChoice> for Stage {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::Wdis => Stage::Wdis,
            MenuChoice::Complaint => Stage::Complaint,
            MenuChoice::Question => Stage::Question,
            MenuChoice::Lonely => Stage::Lonely,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which question the bot asked most recently within a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prompt {
    #[serde(rename = "greet")]
    Greet,
    #[serde(rename = "askTeam")]
    AskTeam,
    #[serde(rename = "ask")]
    Ask,
    #[serde(rename = "fork")]
    Fork,
    /// First (and only) prompt of a sub-topic
    #[serde(rename = "1")]
    Topic,
    #[serde(rename = "idle")]
    Idle,
}

impl Prompt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prompt::Greet => "greet",
            Prompt::AskTeam => "askTeam",
            Prompt::Ask => "ask",
            Prompt::Fork => "fork",
            Prompt::Topic => "1",
            Prompt::Idle => "idle",
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-conversation dialog position, keyed by conversation id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub stage: Stage,
    pub prompt: Prompt,
}

impl ConversationState {
    pub fn new(stage: Stage, prompt: Prompt) -> Self {
        Self { stage, prompt }
    }

    /// State after a sub-topic completes
    pub fn idle() -> Self {
        Self::new(Stage::Other, Prompt::Idle)
    }

    /// Clear back to the idle stage
    pub fn reset(&mut self) {
        *self = Self::idle();
    }

    /// Whether the transition table can produce this (stage, prompt) pair
    pub fn is_reachable(&self) -> bool {
        matches!(
            (self.stage, self.prompt),
            (Stage::Intro, Prompt::Greet)
                | (Stage::Intro, Prompt::AskTeam)
                | (Stage::Menu, Prompt::Ask)
                | (Stage::Menu, Prompt::Fork)
                | (Stage::Wdis, Prompt::Topic)
                | (Stage::Complaint, Prompt::Topic)
                | (Stage::Question, Prompt::Topic)
                | (Stage::Lonely, Prompt::Topic)
                | (Stage::Lonely, Prompt::Idle)
                | (Stage::Other, Prompt::Idle)
        )
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(Stage::Intro, Prompt::Greet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_intro_greet() {
        let state = ConversationState::default();
        assert_eq!(state.stage, Stage::Intro);
        assert_eq!(state.prompt, Prompt::Greet);
        assert!(state.is_reachable());
    }

    #[test]
    fn test_reset_goes_idle() {
        let mut state = ConversationState::new(Stage::Wdis, Prompt::Topic);
        state.reset();
        assert_eq!(state, ConversationState::idle());
    }

    #[test]
    fn test_unreachable_pair() {
        assert!(!ConversationState::new(Stage::Intro, Prompt::Fork).is_reachable());
        assert!(!ConversationState::new(Stage::Other, Prompt::Topic).is_reachable());
    }

    #[test]
    fn test_persisted_tokens() {
        let state = ConversationState::new(Stage::Wdis, Prompt::Topic);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"stage":"WDIS","prompt":"1"}"#);

        let back: ConversationState =
            serde_json::from_str(r#"{"stage":"intro","prompt":"askTeam"}"#).unwrap();
        assert_eq!(back, ConversationState::new(Stage::Intro, Prompt::AskTeam));
    }

    #[test]
    fn test_unknown_stage_token_rejected() {
        let result: std::result::Result<ConversationState, _> =
            serde_json::from_str(r#"{"stage":"karaoke","prompt":"1"}"#);
        assert!(result.is_err());
    }
}
