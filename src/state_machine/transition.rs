//! Pure state transition function
//!
//! Given the state a session was in and the newest input, decide where the
//! session goes and what the runtime has to do about it. No I/O happens here;
//! domain lookups are returned as [`Effect::LookupDomain`] and rendered later
//! with [`render_lookup`].

use super::menu;
use super::{Effect, MenuState};
use crate::ussd::Reply;
use crate::whois::{WhoisError, WhoisRecord};

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: MenuState,
    pub effect: Effect,
}

/// Resolve the next state.
///
/// Falls back to `Entry`; "1" and "2" select a menu item, but a session that
/// was just prompted for a domain always treats its input as the domain name,
/// even when that input is "1" or "2".
pub fn next_state(previous: MenuState, input: &str) -> MenuState {
    if previous == MenuState::PromptForDomain {
        return MenuState::AwaitingDomainInput;
    }

    match input {
        "1" => MenuState::PromptForDomain,
        "2" => MenuState::About,
        _ => MenuState::Entry,
    }
}

/// What to do once a session has reached `state`
pub fn effect_for(state: MenuState, input: &str) -> Effect {
    match state {
        MenuState::Entry => Effect::reply_continue(menu::ENTRY_MENU),
        MenuState::PromptForDomain => Effect::reply_continue(menu::CHECK_FOR_DOMAIN_PROMPT),
        MenuState::AwaitingDomainInput => Effect::lookup_domain(input),
        MenuState::About => Effect::reply_end(menu::ABOUT_SERVICE),
        // `next_state` never resolves to Terminal
        MenuState::Terminal => Effect::reply_end(menu::unrecognized_input(input)),
    }
}

/// Pure transition function
pub fn transition(previous: MenuState, input: &str) -> TransitionResult {
    let new_state = next_state(previous, input);
    TransitionResult {
        new_state,
        effect: effect_for(new_state, input),
    }
}

/// Render the reply for a finished domain lookup
pub fn render_lookup(domain: &str, outcome: Result<&WhoisRecord, &WhoisError>) -> Reply {
    match outcome {
        Err(_) => Reply::failure(),
        Ok(record) if !record.registered => Reply::end(menu::domain_available(domain)),
        Ok(record) => Reply::end(menu::domain_registered(
            domain,
            &record.name,
            &record.changed,
            &record.name_server_list(),
        )),
    }
}
