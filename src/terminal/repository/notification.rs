use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::entity::NotificationMessage;
use crate::domain::repository::notification::InvalidSnafu;
use crate::domain::repository::{GetNotificationError, NotificationRepository};
use crate::terminal::config::{Configuration, MessageSection};

/// A [`NotificationRepository`] implementation which reads configuration files.
pub struct NotificationConfiguration {
    config: Arc<Configuration>,
}

impl NotificationConfiguration {
    /// Creates a new [`NotificationConfiguration`].
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    fn message(section: &MessageSection) -> Result<NotificationMessage, GetNotificationError> {
        NotificationMessage::try_new(section.summary.clone(), section.body.clone())
            .context(InvalidSnafu)
    }
}

#[async_trait::async_trait]
impl NotificationRepository for NotificationConfiguration {
    async fn work_notification(&self) -> Result<NotificationMessage, GetNotificationError> {
        Self::message(&self.config.notification.work)
    }

    async fn rest_notification(&self) -> Result<NotificationMessage, GetNotificationError> {
        Self::message(&self.config.notification.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notification_configuration_get() {
        let mut config = Configuration::default();
        config.notification.rest.summary = String::new();
        let repository = NotificationConfiguration::new(Arc::new(config));

        let work = repository.work_notification().await.unwrap();
        assert_eq!(work.summary(), "Work Time Over");
        assert_eq!(work.body(), Some("Well done! Time for a short rest."));
        assert!(matches!(
            repository.rest_notification().await,
            Err(GetNotificationError::Invalid { .. })
        ));
    }
}
