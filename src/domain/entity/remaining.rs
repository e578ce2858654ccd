use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

/// Time left in a phase, displayed as `MM:SS`.
///
/// Both components are truncated toward zero, so `65.9` seconds shows as
/// `01:05`. Minutes are not wrapped at an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Remaining(Duration);

impl Remaining {
    /// Creates a new [`Remaining`].
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Returns the inner of this [`Remaining`].
    pub fn inner(&self) -> Duration {
        self.0
    }

    /// Returns the remaining time in seconds, including the fractional part.
    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl From<Duration> for Remaining {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

impl Display for Remaining {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let seconds = self.0.as_secs();
        write!(f, "{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(seconds: f64) -> String {
        Remaining::new(Duration::from_secs_f64(seconds)).to_string()
    }

    #[test]
    fn remaining_display_truncates() {
        assert_eq!(format(65.9), "01:05");
        assert_eq!(format(0.999), "00:00");
        assert_eq!(format(59.5), "00:59");
    }

    #[test]
    fn remaining_display_pads() {
        assert_eq!(format(9.0), "00:09");
        assert_eq!(format(600.0), "10:00");
        assert_eq!(format(1500.0), "25:00");
        assert_eq!(format(0.0), "00:00");
    }

    #[test]
    fn remaining_display_does_not_wrap_hours() {
        assert_eq!(format(3600.0), "60:00");
        assert_eq!(format(6000.0), "100:00");
    }
}
