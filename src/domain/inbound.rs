use snafu::prelude::*;
use tokio::time::Duration;

use crate::domain::entity::{Phase, Remaining};
use crate::domain::timer::RunState;

/// A public port for the play/pause control.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TogglePort: Send + Sync + 'static {
    /// Start, pause or resume the timer depending on its state.
    ///
    /// # Errors
    ///
    /// This function will return an error if the timer is unavailable.
    async fn toggle(&self) -> Result<(), RequestTimerError>;
}

/// A public port for starting the current phase.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StartPort: Send + Sync + 'static {
    /// Do the start operation. Ignored unless the timer is idle.
    ///
    /// # Errors
    ///
    /// This function will return an error if the timer is unavailable.
    async fn start(&self) -> Result<(), RequestTimerError>;
}

/// A public port for querying the current state.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait QueryPort: Send + Sync + 'static {
    /// Do the query operation.
    ///
    /// # Errors
    ///
    /// This function will return an error if the timer is unavailable.
    async fn query(&self) -> Result<QueryResponse, RequestTimerError>;
}

/// A public port for tearing the timer down.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StopPort: Send + Sync + 'static {
    /// Stop the timer and its background worker.
    ///
    /// # Errors
    ///
    /// This function will return an error if the timer is already gone.
    async fn stop(&self) -> Result<(), RequestTimerError>;
}

/// The state of the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub phase: Phase,
    pub state: RunState,
    pub total: Duration,
    pub remaining: Remaining,
    pub past: Duration,
}

/// An error type of requesting the timer.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum RequestTimerError {
    #[snafu(display("Timer worker is no longer running"))]
    Unavailable,
}
