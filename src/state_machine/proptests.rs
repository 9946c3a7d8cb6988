//! Property-based tests for the menu state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::transition::{effect_for, next_state};
use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = MenuState> {
    prop_oneof![
        Just(MenuState::Entry),
        Just(MenuState::PromptForDomain),
        Just(MenuState::AwaitingDomainInput),
        Just(MenuState::About),
        Just(MenuState::Terminal),
    ]
}

fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("1".to_string()),
        Just("2".to_string()),
        "[0-9]{1,3}",
        "[a-z0-9-]{1,20}\\.(com|org|mw|dev)",
        ".{0,30}",
    ]
}

fn is_menu_selection(input: &str) -> bool {
    input == "1" || input == "2"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Terminal is bookkeeping only; the transition never resolves to it
    #[test]
    fn prop_transition_never_yields_terminal(previous in arb_state(), input in arb_input()) {
        let result = transition(previous, &input);
        prop_assert_ne!(result.new_state, MenuState::Terminal);
    }

    // Inside the domain prompt every input is a domain, menu digits included
    #[test]
    fn prop_prompt_always_captures_input(input in arb_input()) {
        let result = transition(MenuState::PromptForDomain, &input);
        prop_assert_eq!(result.new_state, MenuState::AwaitingDomainInput);
        prop_assert_eq!(result.effect, Effect::lookup_domain(input.clone()));
    }

    // Outside the prompt, anything but "1"/"2" falls back to the top menu
    #[test]
    fn prop_unmatched_input_resets_to_entry(
        previous in arb_state().prop_filter("not prompting", |s| *s != MenuState::PromptForDomain),
        input in arb_input().prop_filter("not a menu digit", |i| !is_menu_selection(i)),
    ) {
        prop_assert_eq!(next_state(previous, &input), MenuState::Entry);
    }

    // Only the lookup state asks for I/O, and only with the raw input
    #[test]
    fn prop_lookup_effect_iff_awaiting_input(previous in arb_state(), input in arb_input()) {
        let result = transition(previous, &input);
        prop_assert_eq!(
            result.effect.is_lookup(),
            result.new_state == MenuState::AwaitingDomainInput
        );
    }

    // Continuation vs termination is fixed per resolved state
    #[test]
    fn prop_reply_framing_matches_state(previous in arb_state(), input in arb_input()) {
        let result = transition(previous, &input);
        if let Effect::Reply(reply) = &result.effect {
            prop_assert_eq!(reply.is_end(), result.new_state.is_terminating());
        }
    }

    // Transition depends only on its arguments
    #[test]
    fn prop_transition_is_deterministic(previous in arb_state(), input in arb_input()) {
        prop_assert_eq!(transition(previous, &input), transition(previous, &input));
    }

    // The defensive branch echoes whatever input reached it
    #[test]
    fn prop_fallback_echoes_input(input in arb_input()) {
        match effect_for(MenuState::Terminal, &input) {
            Effect::Reply(reply) => {
                prop_assert!(reply.is_end());
                prop_assert!(reply.body.ends_with(input.as_str()));
            }
            Effect::LookupDomain { .. } => prop_assert!(false, "fallback must not look up"),
        }
    }
}
