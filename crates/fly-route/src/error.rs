//! Route-subsystem error type.

use thiserror::Error;

use fly_core::DroneId;

/// Errors produced while planning a single drone's path.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route to the end hub for {drone}: start delays 0..={max_delay} exhausted")]
    NoRoute { drone: DroneId, max_delay: u32 },
}

pub type RouteResult<T> = Result<T, RouteError>;
