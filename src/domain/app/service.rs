use std::sync::Arc;

use crate::domain::inbound::{
    QueryPort, QueryResponse, RequestTimerError, StartPort, StopPort, TogglePort,
};
use crate::domain::worker::{QueryResponse as WorkerQueryResponse, WorkerHandle};

#[derive(Debug)]
pub struct ToggleService {
    worker: Arc<WorkerHandle>,
}

impl ToggleService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl TogglePort for ToggleService {
    async fn toggle(&self) -> Result<(), RequestTimerError> {
        self.worker.toggle().await
    }
}

#[derive(Debug)]
pub struct StartService {
    worker: Arc<WorkerHandle>,
}

impl StartService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl StartPort for StartService {
    async fn start(&self) -> Result<(), RequestTimerError> {
        self.worker.start().await
    }
}

#[derive(Debug)]
pub struct QueryService {
    worker: Arc<WorkerHandle>,
}

impl QueryService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl QueryPort for QueryService {
    async fn query(&self) -> Result<QueryResponse, RequestTimerError> {
        let WorkerQueryResponse { update, state } = self.worker.query().await?;
        Ok(QueryResponse {
            phase: update.phase,
            state,
            total: update.total,
            remaining: update.remaining,
            past: update.total.saturating_sub(update.remaining.inner()),
        })
    }
}

#[derive(Debug)]
pub struct StopService {
    worker: Arc<WorkerHandle>,
}

impl StopService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl StopPort for StopService {
    async fn stop(&self) -> Result<(), RequestTimerError> {
        self.worker.stop().await
    }
}
