//! Network-subsystem error type.
//!
//! Every variant names the offending hub or connection so a run rejected
//! before planning can be fixed from the message alone.

use thiserror::Error;

/// Errors produced while validating or building a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no hub is flagged start_hub")]
    MissingStart,

    #[error("no hub is flagged end_hub")]
    MissingEnd,

    #[error("both {0:?} and {1:?} are flagged start_hub")]
    DuplicateStart(String, String),

    #[error("both {0:?} and {1:?} are flagged end_hub")]
    DuplicateEnd(String, String),

    #[error("connection references unknown hub {0:?}")]
    UnknownHub(String),

    #[error("connection links hub {0:?} to itself")]
    SelfLoop(String),

    #[error("duplicate connection {a:?}-{b:?}")]
    DuplicateLink { a: String, b: String },

    #[error("start hub {name:?} admits {capacity} drones but the fleet has {fleet}")]
    StartTooSmall { name: String, capacity: u32, fleet: u32 },

    #[error("start hub {0:?} is zoned blocked")]
    BlockedStart(String),

    #[error("spec parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
