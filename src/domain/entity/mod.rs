pub mod duration;
pub mod notification;
pub mod phase;
pub mod remaining;

pub use duration::PhaseDuration;
pub use notification::NotificationMessage;
pub use phase::Phase;
pub use remaining::Remaining;
