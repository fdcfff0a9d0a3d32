//! Per-hub zone classification shared across all routing crates.
//!
//! The zone decides how a hub participates in routing; capacity limits apply
//! on top of it.  Zone semantics are enforced by the planner, not here — this
//! is a plain data enum.

/// The transit rule class of a hub.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Zone {
    /// Capacity-limited, no extra rule (default).
    #[default]
    Normal,
    /// Never enterable, regardless of declared capacity.
    Blocked,
    /// Entry costs an extra synchronization hop on the connecting link
    /// (clearance delay) before the hub itself is occupied.
    Restricted,
    /// Each visit raises a path's priority score, used only to break ties
    /// between equally short paths.
    Priority,
}

impl Zone {
    /// Human-readable label, matching the network-spec input values.
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Normal     => "normal",
            Zone::Blocked    => "blocked",
            Zone::Restricted => "restricted",
            Zone::Priority   => "priority",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
