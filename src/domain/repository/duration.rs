use std::error::Error as StdError;

use snafu::prelude::*;
use tokio::time::Duration;

use crate::domain::entity::duration::{PhaseDuration, TryNewPhaseDurationError};

/// An abstract interface for accessing duration data.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DurationRepository: Send + Sync + 'static {
    /// Get duration of the [`Work`] phase.
    ///
    /// [`Work`]: crate::domain::entity::Phase::Work
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the duration.
    async fn work_duration(&self) -> Result<PhaseDuration, GetDurationError>;

    /// Get duration of the [`Rest`] phase.
    ///
    /// [`Rest`]: crate::domain::entity::Phase::Rest
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the duration.
    async fn rest_duration(&self) -> Result<PhaseDuration, GetDurationError>;

    /// Get the period between two ticks of a running timer.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the period or it
    /// is zero.
    async fn tick_interval(&self) -> Result<Duration, GetDurationError>;
}

/// An error type of accessing the repository of [`PhaseDuration`]s.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum GetDurationError {
    #[snafu(display("Could not create an invalid duration"))]
    #[non_exhaustive]
    Invalid { source: TryNewPhaseDurationError },
    #[snafu(display("Tick interval must be greater than zero"))]
    #[non_exhaustive]
    ZeroTickInterval,
    #[snafu(whatever, display("Load duration failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}
