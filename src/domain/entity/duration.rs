use std::time::Duration;

use snafu::prelude::*;

/// The duration of each phase represented in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhaseDuration(Duration);

impl PhaseDuration {
    /// Try to create a [`PhaseDuration`] from a u64 integer.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero.
    pub fn try_new(seconds: u64) -> Result<Self, TryNewPhaseDurationError> {
        ensure!(seconds > 0, ZeroSnafu);
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// Returns the inner of this [`PhaseDuration`].
    pub fn inner(&self) -> Duration {
        self.0
    }
}

impl TryFrom<u64> for PhaseDuration {
    type Error = TryNewPhaseDurationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`PhaseDuration`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewPhaseDurationError {
    #[snafu(display("Duration must be greater than zero"))]
    #[non_exhaustive]
    Zero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_duration_try_new() {
        assert_eq!(
            PhaseDuration::try_new(10),
            Ok(PhaseDuration(Duration::from_secs(10))),
        );
        assert_eq!(
            PhaseDuration::try_new(0),
            Err(TryNewPhaseDurationError::Zero),
        );
    }

    #[test]
    fn phase_duration_try_from() {
        assert_eq!(1500.try_into(), Ok(PhaseDuration(Duration::from_secs(1500))));
        assert_eq!(
            0.try_into(),
            Err::<PhaseDuration, TryNewPhaseDurationError>(TryNewPhaseDurationError::Zero)
        );
    }
}
