pub mod entity;
pub mod inbound;
pub mod outbound;
pub mod repository;
pub mod timer;

mod app;
mod worker;

pub use app::{ApplicationCore, SetupApplicationCoreError};
pub use worker::SpawnWorkerError;
