//! Options menu offered after the introduction

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnrecognizedMenuChoice;

/// One of the four sub-topics a user can pick at the fork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuChoice {
    #[serde(rename = "WDIS")]
    Wdis,
    Complaint,
    Question,
    Lonely,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Wdis,
        MenuChoice::Complaint,
        MenuChoice::Question,
        MenuChoice::Lonely,
    ];

    /// Token the user sends to pick this option
    pub fn token(&self) -> &'static str {
        match self {
            MenuChoice::Wdis => "WDIS",
            MenuChoice::Complaint => "Complaint",
            MenuChoice::Question => "Question",
            MenuChoice::Lonely => "Lonely",
        }
    }

    /// Human-readable label shown next to the token
    pub fn title(&self) -> &'static str {
        match self {
            MenuChoice::Wdis => "Which player should I start?",
            MenuChoice::Complaint => "I'd like to file a complaint or make a suggestion.",
            MenuChoice::Question => "I have a specific question.",
            MenuChoice::Lonely => "I just want someone to talk to",
        }
    }

    /// Plain-text rendering of the whole menu
    pub fn render_menu() -> String {
        let mut menu = String::from("What can I help you with?");
        for choice in Self::ALL {
            menu.push_str(&format!("\n- {}: {}", choice.token(), choice.title()));
        }
        menu
    }
}

impl FromStr for MenuChoice {
    type Err = UnrecognizedMenuChoice;

    /// Exact, case-sensitive token match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| UnrecognizedMenuChoice(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("WDIS".parse::<MenuChoice>(), Ok(MenuChoice::Wdis));
        assert_eq!("Complaint".parse::<MenuChoice>(), Ok(MenuChoice::Complaint));
        assert_eq!("Question".parse::<MenuChoice>(), Ok(MenuChoice::Question));
        assert_eq!("Lonely".parse::<MenuChoice>(), Ok(MenuChoice::Lonely));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "complaint".parse::<MenuChoice>(),
            Err(UnrecognizedMenuChoice("complaint".to_string()))
        );
        assert!(" WDIS".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_render_menu_lists_every_token() {
        let menu = MenuChoice::render_menu();
        assert!(menu.starts_with("What can I help you with?"));
        for choice in MenuChoice::ALL {
            assert!(menu.contains(choice.token()));
        }
        assert_eq!(menu.lines().count(), 5);
    }
}
