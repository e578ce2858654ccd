use std::sync::Arc;

use snafu::prelude::*;
use tokio::time::Duration;

use crate::domain::entity::PhaseDuration;
use crate::domain::repository::duration::{InvalidSnafu, ZeroTickIntervalSnafu};
use crate::domain::repository::{DurationRepository, GetDurationError};
use crate::terminal::config::Configuration;

/// A [`DurationRepository`] implementation which reads configuration files.
pub struct DurationConfiguration {
    config: Arc<Configuration>,
}

impl DurationConfiguration {
    /// Creates a new [`DurationConfiguration`].
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl DurationRepository for DurationConfiguration {
    async fn work_duration(&self) -> Result<PhaseDuration, GetDurationError> {
        PhaseDuration::try_new(self.config.duration.work).context(InvalidSnafu)
    }

    async fn rest_duration(&self) -> Result<PhaseDuration, GetDurationError> {
        PhaseDuration::try_new(self.config.duration.rest).context(InvalidSnafu)
    }

    async fn tick_interval(&self) -> Result<Duration, GetDurationError> {
        let millis = self.config.timer.tick_millis;
        ensure!(millis > 0, ZeroTickIntervalSnafu);
        Ok(Duration::from_millis(millis))
    }
}
