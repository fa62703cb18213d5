//! Stepping direction for working-day walks and holiday adjustments.

/// Which way to walk along the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl Direction {
    /// Signed one-day step: `+1` forward, `-1` backward.
    pub fn step(&self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// The opposite direction.
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        };
        write!(f, "{s}")
    }
}
