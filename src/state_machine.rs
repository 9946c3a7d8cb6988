//! USSD menu state machine
//!
//! Pure transitions from `(previous state, latest input)` to a new state and
//! an [`Effect`]; the runtime executes effects.

mod effect;
mod menu;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use state::MenuState;
pub use transition::{render_lookup, transition, TransitionResult};
