use notify_rust::Notification;
use snafu::prelude::*;

use crate::domain::outbound::{NotifyError, NotifyPort, NotifyRequest};

/// A [`NotifyPort`] implementation which shows desktop notifications.
#[derive(Debug, Clone)]
pub struct NotifyService {
    app_name: String,
}

impl NotifyService {
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }
}

#[async_trait::async_trait]
impl NotifyPort for NotifyService {
    async fn notify_impl(&self, request: NotifyRequest) -> Result<(), NotifyError> {
        let mut notification = Notification::new();
        notification.appname(&self.app_name);
        notification.summary(&request.summary);

        if let Some(body) = request.body {
            notification.body(&body);
        }

        if let Err(err) = notification.show_async().await {
            whatever!("Could not show notification: {err}");
        }

        tracing::debug!(summary = %request.summary, "Showed notification");
        Ok(())
    }
}
