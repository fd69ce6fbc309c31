// engine/src/engine/constants.rs
#![forbid(unsafe_code)]

pub const N_ROWS: usize = 6;
pub const N_COLS: usize = 12;

/**
 * Width of a lane's pattern buffer. Lanes are stored 24 cells wide with a
 * column period of 12; only the first N_COLS cells are the visible playfield.
 * Rotations act on the full buffer so every lane cycle divides N_PHASES.
 */
pub const LANE_LEN: usize = 24;

pub const N_PHASES: u32 = 24;

pub const N_TILES: usize = N_ROWS * N_COLS;
pub const N_STATES: usize = (N_PHASES as usize) * N_TILES;

pub const N_ACTIONS: usize = 5;

/// Encoded state id: `row*N_COLS + col + phase*N_TILES`, a bijection onto `[0, N_STATES)`.
#[inline]
pub fn encode_state(phase: u32, row: usize, col: usize) -> u32 {
    debug_assert!(phase < N_PHASES);
    debug_assert!(row < N_ROWS);
    debug_assert!(col < N_COLS);
    (row * N_COLS + col) as u32 + phase * (N_TILES as u32)
}

/// Inverse of `encode_state`. Returns `(phase, row, col)`.
#[inline]
pub fn decode_state(state: u32) -> (u32, usize, usize) {
    debug_assert!((state as usize) < N_STATES);
    let phase = state / (N_TILES as u32);
    let tile = (state as usize) % N_TILES;
    (phase, tile / N_COLS, tile % N_COLS)
}
