//! `fly-core` — foundational types for the `rust_flyin` fleet router.
//!
//! This crate is a dependency of every other `fly-*` crate.  It intentionally
//! has no `fly-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                                    |
//! |----------|-------------------------------------------------------------|
//! | [`ids`]  | `DroneId`, `HubId`, `LinkId`, `DroneSeq`                    |
//! | [`turn`] | `Turn` — the discrete global time unit                      |
//! | [`zone`] | `Zone` — per-hub transit rule class                         |
//! | [`site`] | `Site` — hub-or-link union (ledger key and search vertex)   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                           |
//! |---------|------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (`fly-network`)    |

pub mod ids;
pub mod site;
pub mod turn;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{DroneId, DroneSeq, HubId, LinkId};
pub use site::Site;
pub use turn::Turn;
pub use zone::Zone;
