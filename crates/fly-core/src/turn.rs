//! The fleet-wide time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Turn` counter shared by the whole
//! fleet: at each turn every drone occupies exactly one site.  There is no
//! wall-clock mapping — a turn is an abstract scheduling step, and the
//! rendering collaborator decides how long one lasts on screen.
//!
//! Using an integer turn as the canonical time unit means all occupancy
//! arithmetic is exact and comparisons are O(1).

use std::fmt;

/// An absolute turn counter, starting at 0 when the fleet is placed on the
/// start hub.
///
/// Stored as `u32`: the planner's wait-and-retry ceiling bounds any schedule
/// to well under 2³² turns.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// Return the turn `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Turn {
        Turn(self.0 + n)
    }

    /// Cast to `usize` for direct use as a turn-series index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u32> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u32) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl std::ops::Sub for Turn {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Turn) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
