// engine/src/engine/tiles.rs
#![forbid(unsafe_code)]

/// Semantic category of one grid cell. Exactly one kind occupies any cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Tile {
    Empty,
    Car,
    Goal,
}

impl Tile {
    pub fn glyph(self) -> char {
        use Tile::*;
        match self {
            Empty => '.',
            Car => 'C',
            Goal => 'F',
        }
    }

    /// Inverse of `glyph()`. Returns None for unknown glyphs.
    pub fn from_glyph(ch: char) -> Option<Self> {
        use Tile::*;
        match ch {
            '.' => Some(Empty),
            'C' => Some(Car),
            'F' => Some(Goal),
            _ => None,
        }
    }
}
