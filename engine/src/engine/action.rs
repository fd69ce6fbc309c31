// engine/src/engine/action.rs
#![forbid(unsafe_code)]

/// Agent move for one step. The integer contract is fixed:
/// `0=stay, 1=left, 2=right, 3=up, 4=down`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    Stay,
    Left,
    Right,
    Up,
    Down,
}

impl Action {
    pub fn all() -> &'static [Action] {
        use Action::*;
        &[Stay, Left, Right, Up, Down]
    }

    /// Wire id in `0..N_ACTIONS`.
    pub fn id(self) -> usize {
        use Action::*;
        match self {
            Stay => 0,
            Left => 1,
            Right => 2,
            Up => 3,
            Down => 4,
        }
    }

    /// Inverse of `id()`. Returns None for out-of-range ids.
    pub fn from_id(id: usize) -> Option<Self> {
        use Action::*;
        match id {
            0 => Some(Stay),
            1 => Some(Left),
            2 => Some(Right),
            3 => Some(Up),
            4 => Some(Down),
            _ => None,
        }
    }
}
