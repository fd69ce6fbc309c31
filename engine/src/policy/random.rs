// engine/src/policy/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::{Action, Env};

use super::base::Policy;

/// Uniform random action each step (the reference demo driver's behavior).
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_action(&mut self, _env: &Env) -> Action {
        *Action::all().choose(&mut self.rng).unwrap()
    }
}
