//! Plain data row types written by output backends.

/// One occupant of one site at one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyRow {
    /// `"hub"` or `"link"`.
    pub kind:  &'static str,
    /// Display name: the hub name, or `"A/B"` for a link.
    pub site:  String,
    pub turn:  u32,
    pub drone: u32,
}

/// One step of one drone's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRow {
    pub drone: u32,
    pub turn:  u32,
    /// Display name of the site occupied at `turn`.
    pub site:  String,
}
