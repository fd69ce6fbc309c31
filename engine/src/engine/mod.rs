// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod action;
mod constants;
mod env;
mod lanes;
mod tiles;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use action::Action;
pub use constants::{
    LANE_LEN, N_ACTIONS, N_COLS, N_PHASES, N_ROWS, N_STATES, N_TILES, decode_state, encode_state,
};
pub use env::{CRASH_REWARD, Env, GOAL_REWARD, STEP_REWARD, StepOutcome, reward_and_done};
pub use lanes::{Drift, Lane, LANE_DRIFTS, advance_lanes, initial_lanes};
pub use tiles::Tile;
