use snafu::prelude::*;
use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Sender as OneshotSender};

use crate::domain::inbound::{RequestTimerError, UnavailableSnafu};
use crate::domain::outbound::TimerUpdate;
use crate::domain::timer::RunState;

/// Result of one query of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryResponse {
    pub update: TimerUpdate,
    pub state: RunState,
}

/// Actions that a [`WorkerRoutine`] runs.
///
/// [`WorkerRoutine`]: crate::domain::worker::routine::WorkerRoutine
#[derive(Debug)]
pub enum Command {
    Toggle,
    Start,
    Query {
        responder: OneshotSender<QueryResponse>,
    },
    Stop {
        responder: OneshotSender<()>,
    },
}

/// Handle that controls a [`WorkerRoutine`].
///
/// [`WorkerRoutine`]: crate::domain::worker::routine::WorkerRoutine
#[derive(Debug, Clone)]
pub struct WorkerHandle {
    requester: Sender<Command>,
}

impl WorkerHandle {
    /// Creates a new [`WorkerHandle`].
    pub fn new(requester: Sender<Command>) -> Self {
        Self { requester }
    }

    /// Send [`Command::Toggle`] to the background worker.
    ///
    /// # Errors
    ///
    /// This function will return an error if the worker has shut down.
    pub async fn toggle(&self) -> Result<(), RequestTimerError> {
        self.send(Command::Toggle).await
    }

    /// Send [`Command::Start`] to the background worker.
    ///
    /// # Errors
    ///
    /// This function will return an error if the worker has shut down.
    pub async fn start(&self) -> Result<(), RequestTimerError> {
        self.send(Command::Start).await
    }

    /// Send [`Command::Query`] to the background worker to get the current
    /// state.
    ///
    /// # Errors
    ///
    /// This function will return an error if the worker has shut down.
    pub async fn query(&self) -> Result<QueryResponse, RequestTimerError> {
        let (responder, receiver) = oneshot::channel();
        self.send(Command::Query { responder }).await?;
        receiver.await.map_err(|_| UnavailableSnafu.build())
    }

    /// Send [`Command::Stop`] to the background worker and wait until it
    /// cancels its ticks and exits.
    ///
    /// # Errors
    ///
    /// This function will return an error if the worker has shut down.
    pub async fn stop(&self) -> Result<(), RequestTimerError> {
        let (responder, receiver) = oneshot::channel();
        self.send(Command::Stop { responder }).await?;
        receiver.await.map_err(|_| UnavailableSnafu.build())
    }

    async fn send(&self, command: Command) -> Result<(), RequestTimerError> {
        self.requester
            .send(command)
            .await
            .map_err(|_| UnavailableSnafu.build())
    }
}
