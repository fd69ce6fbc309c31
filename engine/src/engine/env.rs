// engine/src/engine/env.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::action::Action;
use crate::engine::constants::{N_COLS, N_PHASES, N_ROWS, encode_state};
use crate::engine::lanes::{Lane, advance_lanes, initial_lanes};
use crate::engine::tiles::Tile;

pub const STEP_REWARD: i32 = -1;
pub const CRASH_REWARD: i32 = -20;
pub const GOAL_REWARD: i32 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepOutcome {
    /// Encoded `(phase, row, col)` state id in `[0, N_STATES)`.
    pub state: u32,
    pub reward: i32,
    /// True iff the frog's tile is terminal (car or goal).
    pub done: bool,
}

/// Reward and termination for the tile under the agent after a step settles.
#[inline]
pub fn reward_and_done(tile: Tile) -> (i32, bool) {
    match tile {
        Tile::Empty => (STEP_REWARD, false),
        Tile::Car => (CRASH_REWARD, true),
        Tile::Goal => (GOAL_REWARD, true),
    }
}

/**
 * The Frogger environment: a self-contained finite-state simulator.
 *
 * Owns the lane buffers, the periodic phase counter, and the frog position.
 * `step` is the single transition function; `done` in the returned outcome is
 * NOT latched, so `step` stays callable after a terminal tile. Callers own
 * the reset-on-termination decision.
 *
 * All randomness comes from the seeded RNG owned by the instance (start
 * column on reset), so a fixed seed yields a fully reproducible run.
 */
#[derive(Clone)]
pub struct Env {
    pub lanes: [Lane; N_ROWS],
    pub phase: u32,
    pub frog_row: usize,
    pub frog_col: usize,
    pub steps: u64,

    rng: StdRng,
}

impl Env {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let frog_col = rng.gen_range(0..N_COLS);
        Self {
            lanes: initial_lanes(),
            phase: 0,
            frog_row: N_ROWS - 1,
            frog_col,
            steps: 0,
            rng,
        }
    }

    /// Reinitialize lanes, phase, and frog position. The RNG stream continues
    /// across resets, so episode start columns stay reproducible per seed.
    pub fn reset(&mut self) {
        let col = self.rng.gen_range(0..N_COLS);
        self.reset_to(col);
    }

    /// Deterministic reset used by tests and scripted scenarios.
    pub fn reset_to(&mut self, col: usize) {
        debug_assert!(col < N_COLS);
        self.lanes = initial_lanes();
        self.phase = 0;
        self.frog_row = N_ROWS - 1;
        self.frog_col = col;
        self.steps = 0;
    }

    // -------------------------------------------------------------------------
    // Transition kernel
    // -------------------------------------------------------------------------

    /**
     * Advance one step. Exact order, load-bearing for reward attribution and
     * state encoding:
     *
     * 1. lanes drift, gated by the PRE-increment phase;
     * 2. the frog moves (clamped at all four edges);
     * 3. the phase counter increments mod N_PHASES;
     * 4. the returned state encodes the POST-increment phase;
     * 5. reward/done derive from the tile now under the frog.
     *
     * The phase asymmetry between (1) and (4) reproduces the reference
     * environment bit-exactly: the returned state's phase component is one
     * step ahead of the lane layout that produced the reward.
     */
    pub fn step(&mut self, action: Action) -> StepOutcome {
        self.advance_cars();
        self.move_frog(action);
        self.phase = (self.phase + 1) % N_PHASES;
        self.steps += 1;

        let state = self.state_id();
        let tile = self.tile_at(self.frog_row, self.frog_col);
        let (reward, done) = reward_and_done(tile);
        StepOutcome {
            state,
            reward,
            done,
        }
    }

    /// Integer-contract step: `0=stay, 1=left, 2=right, 3=up, 4=down`.
    /// Out-of-range ids act as `Stay`, preserving reference behavior.
    pub fn step_id(&mut self, action_id: usize) -> StepOutcome {
        self.step(Action::from_id(action_id).unwrap_or(Action::Stay))
    }

    fn advance_cars(&mut self) {
        advance_lanes(&mut self.lanes, self.phase);
    }

    /// Unit move, clamped at the grid edges (no wrap, no failure).
    fn move_frog(&mut self, action: Action) {
        match action {
            Action::Stay => {}
            Action::Left => self.frog_col = self.frog_col.saturating_sub(1),
            Action::Right => self.frog_col = (self.frog_col + 1).min(N_COLS - 1),
            Action::Up => self.frog_row = self.frog_row.saturating_sub(1),
            Action::Down => self.frog_row = (self.frog_row + 1).min(N_ROWS - 1),
        }
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Pure lookup into the visible window.
    #[inline]
    pub fn tile_at(&self, row: usize, col: usize) -> Tile {
        debug_assert!(row < N_ROWS);
        debug_assert!(col < N_COLS);
        self.lanes[row][col]
    }

    /// Encoded state for the current `(phase, frog_row, frog_col)`.
    #[inline]
    pub fn state_id(&self) -> u32 {
        encode_state(self.phase, self.frog_row, self.frog_col)
    }

    // -------------------------------------------------------------------------
    // Pure simulation
    // -------------------------------------------------------------------------

    /// One-step preview without mutating the environment: where the frog
    /// would land and which tile it would land on if `action` were stepped
    /// now. Lane drift for the step is applied to a copy.
    pub fn simulate_action(&self, action: Action) -> (usize, usize, Tile) {
        let mut lanes = self.lanes;
        advance_lanes(&mut lanes, self.phase);

        let (mut row, mut col) = (self.frog_row, self.frog_col);
        match action {
            Action::Stay => {}
            Action::Left => col = col.saturating_sub(1),
            Action::Right => col = (col + 1).min(N_COLS - 1),
            Action::Up => row = row.saturating_sub(1),
            Action::Down => row = (row + 1).min(N_ROWS - 1),
        }

        (row, col, lanes[row][col])
    }

    // -------------------------------------------------------------------------
    // Rendering (observation only; never feeds back into state)
    // -------------------------------------------------------------------------

    pub fn render_ascii(&self) -> String {
        let mut s = String::new();
        s.push_str("+------------+\n");
        for r in 0..N_ROWS {
            s.push('|');
            for c in 0..N_COLS {
                if r == self.frog_row && c == self.frog_col {
                    s.push('@');
                } else {
                    s.push(self.lanes[r][c].glyph());
                }
            }
            s.push_str("|\n");
        }
        s.push_str("+------------+\n");
        s.push_str(&format!(
            "phase={} frog=({},{}) state={} steps={}\n",
            self.phase,
            self.frog_row,
            self.frog_col,
            self.state_id(),
            self.steps,
        ));
        s
    }
}
