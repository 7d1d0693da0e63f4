//! Conversation state machine
//!
//! One call to [`Dialog::step`] handles one turn: it takes the persisted
//! state and the user's text and returns the next state plus the replies to
//! send. No I/O happens here; the host loads and saves state around it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::chooser::PlayerChooser;
use crate::config::DEFAULT_FILLERS;
use crate::error::{ChooserError, UnrecognizedMenuChoice};
use crate::invariants::{assert_conversation_invariants, assert_profile_invariants};
use crate::models::{ConversationState, MenuChoice, Prompt, Stage, UserProfile};

pub const GREETING: &str = "Hello! Who are you?";
pub const ASK_PLAYERS: &str = "Which two players are you choosing between?";
pub const ASK_COMPLAINT: &str = "Ok! What do you have to say?";
pub const ASK_QUESTION: &str = "What is your question?";
pub const ASK_ABOUT_YOURSELF: &str = "Tell me a little bit about yourself.";
pub const NOT_UNDERSTOOD: &str = "Sorry, didn't get that.";
pub const PLAYERS_NOT_FOUND: &str = "Sorry, I couldn't find one or both of those players.";
pub const COMPLAINT_THANKS: &str = "Thank you for your input.";
pub const QUESTION_COMING_SOON: &str = "This feature coming soon.";

/// Everything persisted between turns for one user in one conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnState {
    pub conversation: ConversationState,
    pub profile: UserProfile,
}

/// A recoverable error that was turned into a conversational reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    Chooser(ChooserError),
    Menu(UnrecognizedMenuChoice),
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fallback::Chooser(e) => write!(f, "{}", e),
            Fallback::Menu(e) => write!(f, "{}", e),
        }
    }
}

/// Result of one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State to persist
    pub state: TurnState,
    /// Messages to send, in order
    pub replies: Vec<String>,
    /// Set when the user's text could not be used as asked
    pub fallback: Option<Fallback>,
}

impl Transition {
    fn reply(state: TurnState, text: impl Into<String>) -> Self {
        Self {
            state,
            replies: vec![text.into()],
            fallback: None,
        }
    }

    fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

/// The scripted FFBot conversation
#[derive(Debug, Clone)]
pub struct Dialog {
    chooser: PlayerChooser,
    fillers: Vec<String>,
}

impl Dialog {
    /// Create a dialog with the default small-talk lines
    pub fn new(chooser: PlayerChooser) -> Self {
        Self::with_fillers(chooser, DEFAULT_FILLERS.iter().map(|s| s.to_string()).collect())
    }

    /// Create a dialog with custom small-talk lines
    ///
    /// An empty list falls back to the defaults.
    pub fn with_fillers(chooser: PlayerChooser, fillers: Vec<String>) -> Self {
        let fillers = if fillers.is_empty() {
            DEFAULT_FILLERS.iter().map(|s| s.to_string()).collect()
        } else {
            fillers
        };
        Self { chooser, fillers }
    }

    /// Advance the conversation by one user message
    pub fn step<R: Rng + ?Sized>(&self, current: &TurnState, text: &str, rng: &mut R) -> Transition {
        let mut next = current.clone();
        let conversation = current.conversation;

        let transition = match (conversation.stage, conversation.prompt) {
            (Stage::Intro, Prompt::Greet) => {
                next.conversation = ConversationState::new(Stage::Intro, Prompt::AskTeam);
                Transition::reply(next, GREETING)
            }
            (Stage::Intro, Prompt::AskTeam) => {
                next.profile.user_name = Some(text.to_string());
                next.conversation = ConversationState::new(Stage::Menu, Prompt::Ask);
                Transition::reply(next, format!("Hello, {}. What's your team name?", text))
            }
            (Stage::Menu, Prompt::Ask) => {
                next.profile.team_name = Some(text.to_string());
                next.conversation = ConversationState::new(Stage::Menu, Prompt::Fork);
                Transition {
                    state: next,
                    replies: vec![
                        format!("{} is a very clever name.", text),
                        MenuChoice::render_menu(),
                    ],
                    fallback: None,
                }
            }
            (Stage::Menu, Prompt::Fork) => self.fork(next, text),
            (Stage::Wdis, _) => {
                next.conversation.reset();
                match self.chooser.choose(text, rng) {
                    Ok(starter) => Transition::reply(next, format!("Start {}.", starter)),
                    Err(e) => {
                        let reply = match &e {
                            ChooserError::NoSeparatorFound(_) => NOT_UNDERSTOOD,
                            ChooserError::PlayerNotFound { .. } => PLAYERS_NOT_FOUND,
                        };
                        Transition::reply(next, reply).with_fallback(Fallback::Chooser(e))
                    }
                }
            }
            (Stage::Complaint, _) => {
                next.conversation.reset();
                Transition::reply(next, COMPLAINT_THANKS)
            }
            (Stage::Question, _) => {
                next.conversation.reset();
                Transition::reply(next, QUESTION_COMING_SOON)
            }
            (Stage::Lonely, _) | (Stage::Other, _) => {
                if !next.conversation.is_reachable() {
                    next.conversation.reset();
                }
                let filler = self.filler(rng);
                Transition::reply(next, filler)
            }
            // Intro/Menu pairs not produced by this table; treat as idle small talk
            (stage, prompt) => {
                tracing::warn!(%stage, %prompt, "Unreachable conversation state, resetting");
                next.conversation.reset();
                let filler = self.filler(rng);
                Transition::reply(next, filler)
            }
        };

        assert_conversation_invariants(&transition.state.conversation);
        assert_profile_invariants(&transition.state.conversation, &transition.state.profile);
        transition
    }

    fn fork(&self, mut next: TurnState, text: &str) -> Transition {
        match text.parse::<MenuChoice>() {
            Ok(choice) => {
                next.conversation = ConversationState::new(Stage::from(choice), Prompt::Topic);
                let reply = match choice {
                    MenuChoice::Wdis => ASK_PLAYERS,
                    MenuChoice::Complaint => ASK_COMPLAINT,
                    MenuChoice::Question => ASK_QUESTION,
                    MenuChoice::Lonely => ASK_ABOUT_YOURSELF,
                };
                Transition::reply(next, reply)
            }
            Err(e) => {
                next.conversation = ConversationState::new(Stage::Lonely, Prompt::Idle);
                Transition::reply(next, ASK_ABOUT_YOURSELF).with_fallback(Fallback::Menu(e))
            }
        }
    }

    fn filler<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.fillers
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_FILLERS[0].to_string())
    }
}
