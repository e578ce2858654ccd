use std::error::Error as StdError;
use std::time::Duration;

use snafu::prelude::*;

use crate::domain::entity::{NotificationMessage, Phase, Remaining};

/// One observation of the timer, published on every tick and state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerUpdate {
    pub phase: Phase,
    pub remaining: Remaining,
    pub total: Duration,
    pub running: bool,
}

impl TimerUpdate {
    /// Returns the remaining time formatted as `MM:SS`.
    pub fn remaining_text(&self) -> String {
        self.remaining.to_string()
    }

    /// Returns the remaining time in seconds.
    pub fn remaining_seconds(&self) -> f64 {
        self.remaining.as_secs_f64()
    }

    /// Returns the fraction of the phase that has gone by, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total.is_zero() {
            return 1.0;
        }
        let left = self.remaining.as_secs_f64() / self.total.as_secs_f64();
        (1.0 - left).clamp(0.0, 1.0)
    }
}

/// Published once when a phase runs out. `next` describes the timer after
/// flipping to the following phase, which is not started automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub finished: Phase,
    pub next: TimerUpdate,
}

/// A public port for presentation layers observing the timer.
///
/// Implementations are called synchronously from the task driving the timer
/// and must not block.
#[cfg_attr(test, mockall::automock)]
pub trait UpdatePort: Send + Sync + 'static {
    /// Render one [`TimerUpdate`].
    fn update(&self, update: &TimerUpdate);

    /// React to a finished phase. Renders the following phase by default.
    fn complete(&self, completion: &Completion) {
        self.update(&completion.next);
    }
}

/// A public port for emitting a notification.
#[async_trait::async_trait]
pub trait NotifyPort: Send + Sync + 'static {
    /// Do the notification operation. This method is not intended to be
    /// implemented by adapters directly.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to make a notification.
    async fn notify(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let request = NotifyRequest {
            summary: message.summary().to_owned(),
            body: message.body().map(ToOwned::to_owned),
        };
        self.notify_impl(request).await
    }

    /// Actual implementation of notification operation.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to make a notification.
    async fn notify_impl(&self, request: NotifyRequest) -> Result<(), NotifyError>;
}

/// A structure that stores required data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    pub summary: String,
    pub body: Option<String>,
}

/// An error type of the notification operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum NotifyError {
    #[snafu(whatever, display("Could not emit a notification: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_update(remaining: u64, total: u64) -> TimerUpdate {
        TimerUpdate {
            phase: Phase::Work,
            remaining: Remaining::new(Duration::from_secs(remaining)),
            total: Duration::from_secs(total),
            running: true,
        }
    }

    #[test]
    fn timer_update_fields() {
        let update = TimerUpdate {
            remaining: Remaining::new(Duration::from_secs_f64(65.9)),
            ..new_update(0, 100)
        };
        assert_eq!(update.remaining_text(), "01:05");
        assert!((update.remaining_seconds() - 65.9).abs() < 1e-9);
    }

    #[test]
    fn timer_update_progress() {
        assert_eq!(new_update(10, 10).progress(), 0.0);
        assert_eq!(new_update(5, 10).progress(), 0.5);
        assert_eq!(new_update(0, 10).progress(), 1.0);
    }

    #[test]
    fn update_port_complete_renders_next() {
        struct Recorder(std::sync::Mutex<Vec<TimerUpdate>>);

        impl UpdatePort for Recorder {
            fn update(&self, update: &TimerUpdate) {
                self.0.lock().unwrap().push(*update);
            }
        }

        let recorder = Recorder(Default::default());
        let next = new_update(300, 300);
        recorder.complete(&Completion {
            finished: Phase::Work,
            next,
        });
        assert_eq!(*recorder.0.lock().unwrap(), vec![next]);
    }
}
