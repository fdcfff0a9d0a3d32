//! Validated network specification — the hand-off from the parsing
//! collaborator.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "nb_drones": 2,
//!   "hubs": {
//!     "S": { "x": 0, "y": 0, "zone": "normal", "color": "green",
//!            "max_drones": 2, "start_hub": true },
//!     "A": { "x": 1, "y": 0, "zone": "normal", "color": "grey",
//!            "max_drones": 1 },
//!     "E": { "x": 2, "y": 0, "zone": "normal", "color": "red",
//!            "end_hub": true, "max_drones": 2 }
//!   },
//!   "connections": [["S", "A", 1], ["A", "E", 1]]
//! }
//! ```
//!
//! `start_hub` / `end_hub` default to `false`; exactly one hub must carry
//! each flag.  Connections reference hub names, must join distinct existing
//! hubs, and may not repeat (in either direction).
//!
//! Hubs are keyed by a `BTreeMap`, so they enter the model in name order —
//! two loads of the same spec always produce the same `HubId` assignment.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fly_core::Zone;

use crate::model::{Hub, NetworkBuilder, NetworkModel};
use crate::{NetworkError, NetworkResult};

// ── Input records ─────────────────────────────────────────────────────────────

/// Per-hub metadata as delivered by the parsing collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HubSpec {
    pub x: i32,
    pub y: i32,
    pub zone: Zone,
    pub color: String,
    pub max_drones: u32,
    #[serde(default)]
    pub start_hub: bool,
    #[serde(default)]
    pub end_hub: bool,
}

/// A complete, syntactically valid network description.
///
/// Semantic validation (role uniqueness, dangling or duplicate connections,
/// start-hub admission) happens in [`build`](Self::build).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkSpec {
    pub nb_drones: u32,
    pub hubs: BTreeMap<String, HubSpec>,
    /// `(hub_a, hub_b, capacity)` tuples.
    pub connections: Vec<(String, String, u32)>,
}

impl NetworkSpec {
    /// Deserialize a spec from a JSON reader.
    pub fn from_json_reader<R: Read>(reader: R) -> NetworkResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Deserialize a spec from a JSON file.
    pub fn from_json_file(path: &Path) -> NetworkResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Validate the spec and produce an immutable [`NetworkModel`].
    pub fn build(self) -> NetworkResult<NetworkModel> {
        let mut builder = NetworkBuilder::new(self.nb_drones);

        // BTreeMap iteration is name-sorted: HubIds are stable across runs.
        let mut ids = BTreeMap::new();
        for (name, h) in self.hubs {
            let mut hub = Hub::new(name.clone(), h.zone, h.max_drones)
                .at(h.x, h.y)
                .colored(h.color);
            hub.is_start = h.start_hub;
            hub.is_end = h.end_hub;
            ids.insert(name, builder.add_hub(hub));
        }

        for (a, b, capacity) in self.connections {
            let ha = *ids.get(&a).ok_or_else(|| NetworkError::UnknownHub(a.clone()))?;
            let hb = *ids.get(&b).ok_or_else(|| NetworkError::UnknownHub(b.clone()))?;
            builder.add_link(ha, hb, capacity);
        }

        builder.build()
    }
}
