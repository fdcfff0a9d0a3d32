//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into the arena `Vec`s via `id.0 as usize`, but callers
//! should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a drone in fleet creation order.
    pub struct DroneId(u32);
}

typed_id! {
    /// Index of a hub in the network's hub arena.
    pub struct HubId(u32);
}

typed_id! {
    /// Index of an undirected hub-to-hub link in the network's link arena.
    pub struct LinkId(u32);
}

// ── DroneSeq ──────────────────────────────────────────────────────────────────

/// Fleet-scoped sequential [`DroneId`] generator.
///
/// Yields `DroneId(0), DroneId(1), …` in creation order.  Passed explicitly
/// into the fleet scheduler so that two independent fleets never share a
/// counter and runs stay reproducible.
#[derive(Debug, Default, Clone)]
pub struct DroneSeq {
    next: u32,
}

impl DroneSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id in the sequence.
    #[inline]
    pub fn next_id(&mut self) -> DroneId {
        let id = DroneId(self.next);
        self.next += 1;
        id
    }

    /// How many ids have been issued so far.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.next
    }
}
