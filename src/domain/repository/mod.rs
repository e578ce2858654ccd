pub mod duration;
pub mod notification;

pub use duration::{DurationRepository, GetDurationError};
pub use notification::{GetNotificationError, NotificationRepository};
