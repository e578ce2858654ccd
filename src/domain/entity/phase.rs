use std::fmt::{Display, Formatter, Result as FmtResult};

/// The phase of the working procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Work,
    Rest,
}

impl Phase {
    /// Get an initialized [`Phase`].
    pub fn initial() -> Self {
        Self::Work
    }

    /// Get the next [`Phase`] based on the current one.
    pub fn next(self) -> Self {
        match self {
            Self::Work => Self::Rest,
            Self::Rest => Self::Work,
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Work => f.write_str("Work"),
            Self::Rest => f.write_str("Rest"),
        }
    }
}
