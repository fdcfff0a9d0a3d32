//! `Site` — the hub-or-link union.
//!
//! Hubs and links are both capacity-limited occupiable entities, and both act
//! as vertices in the time-expanded search (a link doubles as a transient
//! "gate" vertex while a drone clears entry into a restricted hub).  A tagged
//! union over the two arena index types keeps hub and gate identities
//! unambiguous without a trait-object hierarchy.

use std::fmt;

use crate::{HubId, LinkId};

/// An occupiable entity: a hub or an undirected link between two hubs.
///
/// Used as the occupancy-ledger key, the search-vertex type, and the element
/// type of a drone's per-turn path.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Site {
    Hub(HubId),
    Link(LinkId),
}

impl Site {
    /// `true` if this site is a hub.
    #[inline]
    pub fn is_hub(self) -> bool {
        matches!(self, Site::Hub(_))
    }

    /// The hub id, if this site is a hub.
    #[inline]
    pub fn as_hub(self) -> Option<HubId> {
        match self {
            Site::Hub(h)  => Some(h),
            Site::Link(_) => None,
        }
    }

    /// The link id, if this site is a link.
    #[inline]
    pub fn as_link(self) -> Option<LinkId> {
        match self {
            Site::Hub(_)  => None,
            Site::Link(l) => Some(l),
        }
    }
}

impl From<HubId> for Site {
    #[inline]
    fn from(h: HubId) -> Site {
        Site::Hub(h)
    }
}

impl From<LinkId> for Site {
    #[inline]
    fn from(l: LinkId) -> Site {
        Site::Link(l)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::Hub(h)  => write!(f, "hub {}", h.0),
            Site::Link(l) => write!(f, "link {}", l.0),
        }
    }
}
