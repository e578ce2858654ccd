use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::notification::{NotificationMessage, TryNewNotificationMessageError};

/// An abstract interface for accessing the messages shown when a phase ends.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NotificationRepository: Send + Sync + 'static {
    /// Get the message shown when the [`Work`] phase ends.
    ///
    /// [`Work`]: crate::domain::entity::Phase::Work
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the message.
    async fn work_notification(&self) -> Result<NotificationMessage, GetNotificationError>;

    /// Get the message shown when the [`Rest`] phase ends.
    ///
    /// [`Rest`]: crate::domain::entity::Phase::Rest
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the message.
    async fn rest_notification(&self) -> Result<NotificationMessage, GetNotificationError>;
}

/// An error type of accessing the repository of [`NotificationMessage`]s.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum GetNotificationError {
    #[snafu(display("Could not create an invalid notification message"))]
    #[non_exhaustive]
    Invalid {
        source: TryNewNotificationMessageError,
    },
    #[snafu(whatever, display("Load notification failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}
