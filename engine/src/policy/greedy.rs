// engine/src/policy/greedy.rs
#![forbid(unsafe_code)]

use crate::engine::{Action, Env, Tile};

use super::base::Policy;

/**
 * Deterministic one-step lookahead.
 *
 * Walks a fixed preference order (Up first, retreat last) and picks the first
 * action whose landing tile is not a car, using the engine's pure preview.
 * If every candidate lands on a car there is no safe move this step; `Stay`
 * is returned and the collision is taken.
 */
pub struct GreedyPolicy;

const PREFERENCE: [Action; 5] = [
    Action::Up,
    Action::Stay,
    Action::Left,
    Action::Right,
    Action::Down,
];

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for GreedyPolicy {
    fn choose_action(&mut self, env: &Env) -> Action {
        for action in PREFERENCE {
            let (_row, _col, tile) = env.simulate_action(action);
            if tile != Tile::Car {
                return action;
            }
        }
        Action::Stay
    }
}
