use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::app::service::{QueryService, StartService, StopService, ToggleService};
use crate::domain::inbound::{QueryPort, StartPort, StopPort, TogglePort};
use crate::domain::outbound::{NotifyPort, UpdatePort};
use crate::domain::repository::{DurationRepository, NotificationRepository};
use crate::domain::worker::{self, SpawnWorkerError};

/// Entrance to the domain logic, providing ports for external adapters.
pub struct ApplicationCore {
    pub toggle: Arc<dyn TogglePort>,
    pub start: Arc<dyn StartPort>,
    pub query: Arc<dyn QueryPort>,
    pub stop: Arc<dyn StopPort>,
}

impl ApplicationCore {
    /// Initialize the application by injecting external repositories and
    /// adapters. Desktop notifications are disabled when `notify_port` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// This function will return an error if initialization failed.
    pub async fn setup(
        duration_repository: Arc<dyn DurationRepository>,
        notification_repository: Arc<dyn NotificationRepository>,
        notify_port: Option<Arc<dyn NotifyPort>>,
        update_ports: Vec<Arc<dyn UpdatePort>>,
    ) -> Result<ApplicationCore, SetupApplicationCoreError> {
        let worker = worker::spawn(
            duration_repository,
            notification_repository,
            notify_port,
            update_ports,
        )
        .await
        .context(WorkerSnafu)?;
        let worker = Arc::new(worker);

        let toggle_port = Arc::new(ToggleService::new(Arc::clone(&worker)));
        let start_port = Arc::new(StartService::new(Arc::clone(&worker)));
        let query_port = Arc::new(QueryService::new(Arc::clone(&worker)));
        let stop_port = Arc::new(StopService::new(Arc::clone(&worker)));

        let app = ApplicationCore {
            toggle: toggle_port,
            start: start_port,
            query: query_port,
            stop: stop_port,
        };

        Ok(app)
    }

    /// Assemble an [`ApplicationCore`] from already constructed ports.
    pub fn from_ports(
        toggle: Arc<dyn TogglePort>,
        start: Arc<dyn StartPort>,
        query: Arc<dyn QueryPort>,
        stop: Arc<dyn StopPort>,
    ) -> ApplicationCore {
        Self {
            toggle,
            start,
            query,
            stop,
        }
    }
}

/// An error for initializing the application.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SetupApplicationCoreError {
    #[snafu(display("Could not spawn a background worker"))]
    Worker { source: SpawnWorkerError },
}
