//! Fleet-subsystem error type.

use thiserror::Error;

use fly_route::RouteError;

/// Errors that abort a fleet run.
///
/// A routing failure is fatal to the whole run: the schedule under
/// construction is discarded rather than delivered with a drone missing.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet run aborted: {0}")]
    Route(#[from] RouteError),
}

pub type FleetResult<T> = Result<T, FleetError>;
