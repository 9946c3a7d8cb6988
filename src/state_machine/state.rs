//! Menu state types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a session in the USSD menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Top-level menu, also the fallback for any unmatched input
    #[default]
    Entry,

    /// User picked "check for domain" and is being asked for a name
    PromptForDomain,

    /// The last input is a domain name to look up
    AwaitingDomainInput,

    /// Static service description
    About,

    /// Conversation ended with an END reply
    Terminal,
}

impl MenuState {
    /// Whether replies rendered for this state close the USSD session
    #[allow(dead_code)] // State query utility
    pub fn is_terminating(self) -> bool {
        matches!(
            self,
            MenuState::AwaitingDomainInput | MenuState::About | MenuState::Terminal
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Entry => "entry",
            MenuState::PromptForDomain => "prompt_for_domain",
            MenuState::AwaitingDomainInput => "awaiting_domain_input",
            MenuState::About => "about",
            MenuState::Terminal => "terminal",
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_entry() {
        assert_eq!(MenuState::default(), MenuState::Entry);
    }

    #[test]
    fn test_continuing_states() {
        assert!(!MenuState::Entry.is_terminating());
        assert!(!MenuState::PromptForDomain.is_terminating());
        assert!(MenuState::About.is_terminating());
        assert!(MenuState::AwaitingDomainInput.is_terminating());
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&MenuState::PromptForDomain).unwrap();
        assert_eq!(json, "\"prompt_for_domain\"");
        assert_eq!(MenuState::PromptForDomain.to_string(), "prompt_for_domain");
    }
}
