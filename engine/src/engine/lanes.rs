// engine/src/engine/lanes.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{LANE_LEN, N_ROWS};
use crate::engine::tiles::Tile;

pub type Lane = [Tile; LANE_LEN];

/**
 * Canonical lane patterns, one per row, 24 cells wide with column period 12.
 * Row 0 is the goal bank, row N_ROWS-1 the start bank; rows 1..=4 carry cars.
 * Glyphs are `Tile` glyphs ('.', 'C', 'F').
 */
const LANE_PATTERNS: [&str; N_ROWS] = [
    "FFFFFFFFFFFFFFFFFFFFFFFF",
    "CCCCCC......CCCCCC......",
    "...CCC.........CCC......",
    ".CCCCC.......CCCCC......",
    ".......CC..........CC...",
    "........................",
];

/// Per-step lane motion. `RightEveryOther` rotates only on even phases (half-speed lane).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Drift {
    Hold,
    Right(usize),
    Left(usize),
    RightEveryOther,
}

/// Fixed drift rule per row. Goal and start banks never move.
pub const LANE_DRIFTS: [Drift; N_ROWS] = [
    Drift::Hold,
    Drift::Right(1),
    Drift::Left(2),
    Drift::RightEveryOther,
    Drift::Left(1),
    Drift::Hold,
];

fn parse_lane(pattern: &str) -> Lane {
    assert_eq!(pattern.len(), LANE_LEN, "lane pattern must be {LANE_LEN} cells");
    let mut lane = [Tile::Empty; LANE_LEN];
    for (i, ch) in pattern.chars().enumerate() {
        lane[i] = Tile::from_glyph(ch)
            .unwrap_or_else(|| panic!("invalid lane pattern glyph {ch:?} at column {i}"));
    }
    lane
}

/// Canonical phase-0 lane layout.
pub fn initial_lanes() -> [Lane; N_ROWS] {
    core::array::from_fn(|r| parse_lane(LANE_PATTERNS[r]))
}

/// Apply one step of drift to every lane.
///
/// `phase` must be the pre-increment phase for the step: it gates the
/// half-speed row, which only moves when the phase is even.
pub fn advance_lanes(lanes: &mut [Lane; N_ROWS], phase: u32) {
    for (lane, drift) in lanes.iter_mut().zip(LANE_DRIFTS) {
        match drift {
            Drift::Hold => {}
            Drift::Right(k) => lane.rotate_right(k),
            Drift::Left(k) => lane.rotate_left(k),
            Drift::RightEveryOther => {
                if phase % 2 == 0 {
                    lane.rotate_right(1);
                }
            }
        }
    }
}
