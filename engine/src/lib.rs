// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod policy;

// Re-export the bits drivers and tests need:
pub use engine::{
    Action, Drift, Env, Lane, StepOutcome, Tile, CRASH_REWARD, GOAL_REWARD, LANE_LEN, N_ACTIONS,
    N_COLS, N_PHASES, N_ROWS, N_STATES, N_TILES, STEP_REWARD, decode_state, encode_state,
    initial_lanes,
};
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
