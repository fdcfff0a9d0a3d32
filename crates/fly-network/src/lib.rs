//! `fly-network` — the immutable hub/link network model.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`model`] | `NetworkModel` (arenas + CSR adjacency), `NetworkBuilder` |
//! | [`spec`]  | `NetworkSpec` serde input types + validation              |
//! | [`error`] | `NetworkError`, `NetworkResult<T>`                        |
//!
//! The model answers adjacency and classification queries only; occupancy
//! lives in `fly-occupancy` and planning in `fly-route`.

pub mod error;
pub mod model;
pub mod spec;


pub use error::{NetworkError, NetworkResult};
pub use model::{Hub, Link, NetworkBuilder, NetworkModel};
pub use spec::{HubSpec, NetworkSpec};
