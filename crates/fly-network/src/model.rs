//! Network representation and builder.
//!
//! # Data layout
//!
//! Hubs and links live in two parallel arenas indexed by `HubId` / `LinkId`.
//! Adjacency uses **Compressed Sparse Row (CSR)** format: given a `HubId h`,
//! its incident links occupy the slice
//!
//! ```text
//! adjacency[ hub_link_start[h] .. hub_link_start[h+1] ]
//! ```
//!
//! Links are undirected, so each appears in both endpoints' slices.  Within a
//! hub's slice, links keep their declaration order — the planner's frontier
//! expansion order, and therefore the whole schedule, is deterministic.

use std::collections::HashSet;

use fly_core::{HubId, LinkId, Site, Zone};

use crate::{NetworkError, NetworkResult};

// ── Hub ───────────────────────────────────────────────────────────────────────

/// A network node with position, style, zone, and per-turn capacity.
#[derive(Debug, Clone)]
pub struct Hub {
    pub name:     String,
    pub x:        i32,
    pub y:        i32,
    pub zone:     Zone,
    /// Display color name, passed through to the rendering collaborator.
    pub color:    String,
    /// Maximum simultaneous occupants per turn.
    pub capacity: u32,
    pub is_start: bool,
    pub is_end:   bool,
}

impl Hub {
    /// A plain hub at the origin; adjust with the chainer methods below.
    pub fn new(name: impl Into<String>, zone: Zone, capacity: u32) -> Self {
        Self {
            name: name.into(),
            x: 0,
            y: 0,
            zone,
            color: "grey".to_owned(),
            capacity,
            is_start: false,
            is_end: false,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn as_start(mut self) -> Self {
        self.is_start = true;
        self
    }

    pub fn as_end(mut self) -> Self {
        self.is_end = true;
        self
    }
}

// ── Link ──────────────────────────────────────────────────────────────────────

/// An undirected capacity-limited edge between two distinct hubs.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub a:        HubId,
    pub b:        HubId,
    /// Maximum simultaneous occupants per turn.
    pub capacity: u32,
}

impl Link {
    /// Both endpoints, in declaration order.
    #[inline]
    pub fn endpoints(self) -> [HubId; 2] {
        [self.a, self.b]
    }
}

// ── NetworkModel ──────────────────────────────────────────────────────────────

/// Immutable hub/link graph with zone and capacity metadata.
///
/// Pure adjacency and classification queries — no occupancy, no planning.
/// Do not construct directly; use [`NetworkBuilder`] or
/// [`NetworkSpec::build`](crate::NetworkSpec::build).
pub struct NetworkModel {
    hubs:  Vec<Hub>,
    links: Vec<Link>,

    /// CSR row pointer.  Incident links of hub `h` are at
    /// `adjacency[hub_link_start[h] .. hub_link_start[h+1]]`.
    /// Length = `hub_count + 1`.
    hub_link_start: Vec<u32>,
    adjacency:      Vec<LinkId>,

    start:      HubId,
    end:        HubId,
    fleet_size: u32,
}

impl NetworkModel {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The fleet size declared by the network specification (`nb_drones`).
    pub fn fleet_size(&self) -> u32 {
        self.fleet_size
    }

    // ── Arena access ──────────────────────────────────────────────────────

    #[inline]
    pub fn hub(&self, id: HubId) -> &Hub {
        &self.hubs[id.index()]
    }

    #[inline]
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.index()]
    }

    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    // ── Roles ─────────────────────────────────────────────────────────────

    /// The unique hub flagged as the fleet's origin.
    pub fn start_hub(&self) -> HubId {
        self.start
    }

    /// The unique hub flagged as the fleet's destination.
    pub fn end_hub(&self) -> HubId {
        self.end
    }

    // ── Classification queries ────────────────────────────────────────────

    #[inline]
    pub fn zone(&self, hub: HubId) -> Zone {
        self.hubs[hub.index()].zone
    }

    /// `true` if the hub can never be entered, regardless of capacity.
    #[inline]
    pub fn is_blocked(&self, hub: HubId) -> bool {
        self.hubs[hub.index()].zone == Zone::Blocked
    }

    /// Declared per-turn capacity of a hub or link.
    #[inline]
    pub fn capacity(&self, site: Site) -> u32 {
        match site {
            Site::Hub(h)  => self.hubs[h.index()].capacity,
            Site::Link(l) => self.links[l.index()].capacity,
        }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the incident links of `hub`, in declaration order.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn links_of(&self, hub: HubId) -> impl Iterator<Item = LinkId> + '_ {
        let start = self.hub_link_start[hub.index()] as usize;
        let end   = self.hub_link_start[hub.index() + 1] as usize;
        self.adjacency[start..end].iter().copied()
    }

    /// Degree of `hub` (number of incident links).
    #[inline]
    pub fn degree(&self, hub: HubId) -> usize {
        let start = self.hub_link_start[hub.index()] as usize;
        let end   = self.hub_link_start[hub.index() + 1] as usize;
        end - start
    }

    /// The link joining `a` and `b`, if one exists (direction-insensitive).
    pub fn link_between(&self, a: HubId, b: HubId) -> Option<LinkId> {
        self.links_of(a)
            .find(|&l| self.other_endpoint(l, a) == b)
    }

    /// The endpoint of `link` that is not `hub`.
    ///
    /// # Panics
    /// Panics in debug mode if `hub` is not an endpoint of `link`.
    #[inline]
    pub fn other_endpoint(&self, link: LinkId, hub: HubId) -> HubId {
        let l = self.links[link.index()];
        debug_assert!(hub == l.a || hub == l.b, "{hub} is not an endpoint of {link}");
        if l.a == hub { l.b } else { l.a }
    }

    // ── Display identities ────────────────────────────────────────────────

    /// Derived display name of a link: `"A/B"` from its endpoint hub names.
    pub fn link_name(&self, link: LinkId) -> String {
        let l = self.links[link.index()];
        format!("{}/{}", self.hubs[l.a.index()].name, self.hubs[l.b.index()].name)
    }

    /// Display name of any site (hub name, or `"A/B"` for a link).
    pub fn site_name(&self, site: Site) -> String {
        match site {
            Site::Hub(h)  => self.hubs[h.index()].name.clone(),
            Site::Link(l) => self.link_name(l),
        }
    }

    /// Look up a hub by name.  Linear scan — networks are small.
    pub fn hub_by_name(&self, name: &str) -> Option<HubId> {
        self.hubs
            .iter()
            .position(|h| h.name == name)
            .map(|i| HubId(i as u32))
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`NetworkModel`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts hubs and undirected links in any order.  `build()`
/// checks the role invariants (exactly one start, one end, start not blocked
/// and large enough for the fleet) and constructs the CSR adjacency.
///
/// # Example
///
/// ```
/// use fly_core::Zone;
/// use fly_network::{Hub, NetworkBuilder};
///
/// let mut b = NetworkBuilder::new(2);
/// let s = b.add_hub(Hub::new("S", Zone::Normal, 2).as_start());
/// let e = b.add_hub(Hub::new("E", Zone::Normal, 2).as_end());
/// b.add_link(s, e, 1);
/// let net = b.build().unwrap();
/// assert_eq!(net.hub_count(), 2);
/// assert_eq!(net.degree(s), 1);
/// ```
pub struct NetworkBuilder {
    hubs:       Vec<Hub>,
    links:      Vec<Link>,
    fleet_size: u32,
}

impl NetworkBuilder {
    pub fn new(fleet_size: u32) -> Self {
        Self {
            hubs:  Vec::new(),
            links: Vec::new(),
            fleet_size,
        }
    }

    /// Add a hub and return its `HubId` (sequential from 0).
    pub fn add_hub(&mut self, hub: Hub) -> HubId {
        let id = HubId(self.hubs.len() as u32);
        self.hubs.push(hub);
        id
    }

    /// Add an undirected link between two previously added hubs.
    pub fn add_link(&mut self, a: HubId, b: HubId, capacity: u32) -> LinkId {
        let id = LinkId(self.links.len() as u32);
        self.links.push(Link { a, b, capacity });
        id
    }

    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Validate role invariants and produce a [`NetworkModel`].
    ///
    /// Time complexity: O(H + L) — one counting pass and one fill pass for
    /// the CSR arrays.
    pub fn build(self) -> NetworkResult<NetworkModel> {
        let (start, end) = find_roles(&self.hubs)?;

        let start_hub = &self.hubs[start.index()];
        if start_hub.zone == Zone::Blocked {
            return Err(NetworkError::BlockedStart(start_hub.name.clone()));
        }
        if start_hub.capacity < self.fleet_size {
            return Err(NetworkError::StartTooSmall {
                name:     start_hub.name.clone(),
                capacity: start_hub.capacity,
                fleet:    self.fleet_size,
            });
        }

        let mut seen = HashSet::with_capacity(self.links.len());
        for link in &self.links {
            if link.a == link.b {
                return Err(NetworkError::SelfLoop(self.hubs[link.a.index()].name.clone()));
            }
            let key = (link.a.min(link.b), link.a.max(link.b));
            if !seen.insert(key) {
                return Err(NetworkError::DuplicateLink {
                    a: self.hubs[link.a.index()].name.clone(),
                    b: self.hubs[link.b.index()].name.clone(),
                });
            }
        }

        // ── CSR adjacency (each undirected link counts toward both ends) ──
        let hub_count = self.hubs.len();
        let mut hub_link_start = vec![0u32; hub_count + 1];
        for link in &self.links {
            hub_link_start[link.a.index() + 1] += 1;
            hub_link_start[link.b.index() + 1] += 1;
        }
        for i in 1..=hub_count {
            hub_link_start[i] += hub_link_start[i - 1];
        }

        // Fill with a per-hub cursor so each slice keeps declaration order.
        let mut cursor: Vec<u32> = hub_link_start[..hub_count].to_vec();
        let mut adjacency = vec![LinkId::INVALID; self.links.len() * 2];
        for (i, link) in self.links.iter().enumerate() {
            for hub in [link.a, link.b] {
                adjacency[cursor[hub.index()] as usize] = LinkId(i as u32);
                cursor[hub.index()] += 1;
            }
        }
        debug_assert!(!adjacency.contains(&LinkId::INVALID));

        Ok(NetworkModel {
            hubs: self.hubs,
            links: self.links,
            hub_link_start,
            adjacency,
            start,
            end,
            fleet_size: self.fleet_size,
        })
    }
}

/// Locate the unique start and end hubs, rejecting missing or doubled roles.
fn find_roles(hubs: &[Hub]) -> NetworkResult<(HubId, HubId)> {
    let mut start: Option<HubId> = None;
    let mut end:   Option<HubId> = None;

    for (i, hub) in hubs.iter().enumerate() {
        let id = HubId(i as u32);
        if hub.is_start {
            if let Some(prev) = start {
                return Err(NetworkError::DuplicateStart(
                    hubs[prev.index()].name.clone(),
                    hub.name.clone(),
                ));
            }
            start = Some(id);
        }
        if hub.is_end {
            if let Some(prev) = end {
                return Err(NetworkError::DuplicateEnd(
                    hubs[prev.index()].name.clone(),
                    hub.name.clone(),
                ));
            }
            end = Some(id);
        }
    }

    match (start, end) {
        (Some(s), Some(e)) => Ok((s, e)),
        (None, _)          => Err(NetworkError::MissingStart),
        (_, None)          => Err(NetworkError::MissingEnd),
    }
}
