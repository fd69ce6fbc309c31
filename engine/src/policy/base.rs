// engine/src/policy/base.rs
#![forbid(unsafe_code)]

use crate::engine::{Action, Env};

/// Policy chooses the next move for the current state.
///
/// Every action is always legal in this domain (moves clamp at the edges),
/// so there is no "no legal action" case to represent.
///
/// Object-safe so it can be used as `Box<dyn Policy>`.
pub trait Policy {
    fn choose_action(&mut self, env: &Env) -> Action;
}
