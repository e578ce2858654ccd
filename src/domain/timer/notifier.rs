use std::sync::Arc;

use crate::domain::entity::{NotificationMessage, Phase};
use crate::domain::outbound::{Completion, NotifyPort, TimerUpdate, UpdatePort};
use crate::tracing_report;

/// An [`UpdatePort`] which emits a notification whenever a phase runs out.
pub struct CompletionNotifier {
    work: NotificationMessage,
    rest: NotificationMessage,
    notifier: Arc<dyn NotifyPort>,
}

impl CompletionNotifier {
    /// Creates a new [`CompletionNotifier`].
    pub fn new(
        work: NotificationMessage,
        rest: NotificationMessage,
        notifier: Arc<dyn NotifyPort>,
    ) -> Self {
        Self {
            work,
            rest,
            notifier,
        }
    }

    /// Get the notification message corresponding to the finished phase.
    pub fn message(&self, finished: Phase) -> &NotificationMessage {
        match finished {
            Phase::Work => &self.work,
            Phase::Rest => &self.rest,
        }
    }
}

impl UpdatePort for CompletionNotifier {
    fn update(&self, _update: &TimerUpdate) {}

    fn complete(&self, completion: &Completion) {
        let message = self.message(completion.finished).clone();
        let notifier = Arc::clone(&self.notifier);

        // Notification backends may block on IPC, keep it off the timer task.
        tokio::spawn(async move {
            if let Err(err) = notifier.notify(&message).await {
                tracing_report!(err, "Could not notify about finished phase");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::time::Duration;

    use crate::domain::entity::Remaining;
    use crate::domain::outbound::{NotifyError, NotifyRequest};

    struct MockNotifier {
        notifications: Arc<Mutex<Vec<NotifyRequest>>>,
    }

    impl MockNotifier {
        fn new() -> (Arc<dyn NotifyPort>, Arc<Mutex<Vec<NotifyRequest>>>) {
            let notifier = Arc::new(Mutex::new(Vec::new()));
            let res = Self {
                notifications: Arc::clone(&notifier),
            };
            (Arc::new(res), notifier)
        }
    }

    #[async_trait::async_trait]
    impl NotifyPort for MockNotifier {
        async fn notify_impl(&self, request: NotifyRequest) -> Result<(), NotifyError> {
            self.notifications.lock().unwrap().push(request);
            Ok(())
        }
    }

    fn new_notifier() -> (CompletionNotifier, Arc<Mutex<Vec<NotifyRequest>>>) {
        let new_message = |s: &str| NotificationMessage::try_new(s.to_owned(), None).unwrap();
        let (mock, data) = MockNotifier::new();
        let notifier = CompletionNotifier::new(new_message("Work"), new_message("Rest"), mock);
        (notifier, data)
    }

    fn completion(finished: Phase) -> Completion {
        Completion {
            finished,
            next: TimerUpdate {
                phase: finished.next(),
                remaining: Remaining::new(Duration::from_secs(300)),
                total: Duration::from_secs(300),
                running: false,
            },
        }
    }

    async fn settle() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn completion_notifier_complete() {
        let (notifier, data) = new_notifier();

        notifier.complete(&completion(Phase::Work));
        settle().await;
        notifier.complete(&completion(Phase::Rest));
        settle().await;

        let summaries: Vec<_> = data
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.summary.clone())
            .collect();
        assert_eq!(summaries, vec!["Work", "Rest"]);
    }

    #[tokio::test]
    async fn completion_notifier_ignores_updates() {
        let (notifier, data) = new_notifier();

        notifier.update(&completion(Phase::Work).next);
        settle().await;

        assert!(data.lock().unwrap().is_empty());
    }
}
