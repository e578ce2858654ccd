mod handle;
mod routine;

pub use handle::{QueryResponse, WorkerHandle};

use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::entity::Phase;
use crate::domain::outbound::{NotifyPort, UpdatePort};
use crate::domain::repository::{
    DurationRepository, GetDurationError, GetNotificationError, NotificationRepository,
};
use crate::domain::timer::{CompletionNotifier, TimerConfig};

use routine::{WorkerConfig, WorkerRoutine};

/// Spawn the background worker driving the timer. A [`CompletionNotifier`]
/// is attached after `observers` when `notifier` is given.
///
/// # Errors
///
/// This function will return an error if loading configuration from the
/// repositories fails.
pub async fn spawn(
    duration_repository: Arc<dyn DurationRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    notifier: Option<Arc<dyn NotifyPort>>,
    mut observers: Vec<Arc<dyn UpdatePort>>,
) -> Result<WorkerHandle, SpawnWorkerError> {
    let config = load_config(duration_repository).await?;

    if let Some(notifier) = notifier {
        let completion = load_notifier(notification_repository, notifier).await?;
        observers.push(Arc::new(completion));
    }

    let (requester, commands) = tokio::sync::mpsc::channel(1);
    WorkerRoutine::spawn(config, commands, observers);
    Ok(WorkerHandle::new(requester))
}

async fn load_config(
    duration_repository: Arc<dyn DurationRepository>,
) -> Result<WorkerConfig, SpawnWorkerError> {
    let work = duration_repository
        .work_duration()
        .await
        .context(DurationConfigSnafu { key: Phase::Work })?;
    let rest = duration_repository
        .rest_duration()
        .await
        .context(DurationConfigSnafu { key: Phase::Rest })?;
    let tick_interval = duration_repository
        .tick_interval()
        .await
        .context(TickIntervalConfigSnafu)?;

    Ok(WorkerConfig {
        timer: TimerConfig { work, rest },
        tick_interval,
    })
}

async fn load_notifier(
    notification_repository: Arc<dyn NotificationRepository>,
    notifier: Arc<dyn NotifyPort>,
) -> Result<CompletionNotifier, SpawnWorkerError> {
    let work = notification_repository
        .work_notification()
        .await
        .context(NotificationConfigSnafu { key: Phase::Work })?;
    let rest = notification_repository
        .rest_notification()
        .await
        .context(NotificationConfigSnafu { key: Phase::Rest })?;

    Ok(CompletionNotifier::new(work, rest, notifier))
}

/// An error for spawning the background worker.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SpawnWorkerError {
    #[snafu(display("Could not load duration configuration for {key} from repository"))]
    DurationConfig {
        key: Phase,
        source: GetDurationError,
    },
    #[snafu(display("Could not load tick interval from repository"))]
    TickIntervalConfig { source: GetDurationError },
    #[snafu(display("Could not load notification configuration for {key} from repository"))]
    NotificationConfig {
        key: Phase,
        source: GetNotificationError,
    },
}
