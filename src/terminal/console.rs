use std::io::Error as IoError;
use std::str::FromStr;
use std::sync::Arc;

use snafu::prelude::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::domain::entity::Remaining;
use crate::domain::inbound::{QueryResponse, RequestTimerError};
use crate::domain::ApplicationCore;

/// A command typed on the console, one per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// An empty line, `p` or `t`.
    Toggle,
    /// `s`.
    Start,
    /// `?` or `status`.
    Status,
    /// `q` or `quit`.
    Quit,
}

impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "p" | "t" | "toggle" => Ok(Self::Toggle),
            "s" | "start" => Ok(Self::Start),
            "?" | "status" => Ok(Self::Status),
            "q" | "quit" => Ok(Self::Quit),
            other => UnknownSnafu { input: other }.fail(),
        }
    }
}

/// Reads [`Input`]s line by line and forwards them to the timer.
pub struct Console {
    core: Arc<ApplicationCore>,
}

impl Console {
    /// Creates a new [`Console`].
    pub fn new(core: Arc<ApplicationCore>) -> Self {
        Self { core }
    }

    /// Handle inputs until [`Input::Quit`] or the end of `reader`.
    ///
    /// # Errors
    ///
    /// This function will return an error if reading fails or the timer is
    /// unavailable.
    pub async fn run<R: AsyncBufRead + Unpin>(&self, reader: R) -> Result<(), ConsoleError> {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await.context(ReadSnafu)? {
            match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(input) => self.handle(input).await?,
                Err(err) => tracing::warn!(%err, "Ignored input"),
            }
        }

        Ok(())
    }

    async fn handle(&self, input: Input) -> Result<(), ConsoleError> {
        tracing::debug!(?input, "Received input");

        match input {
            Input::Toggle => self.core.toggle.toggle().await.context(RequestSnafu),
            Input::Start => self.core.start.start().await.context(RequestSnafu),
            Input::Status => {
                let response = self.core.query.query().await.context(RequestSnafu)?;
                println!("\n{}", describe(&response));
                Ok(())
            }
            Input::Quit => Ok(()),
        }
    }
}

/// Describe the state of the timer in one line.
pub fn describe(response: &QueryResponse) -> String {
    format!(
        "Phase: {}, State: {}, Remaining: {}, Past: {}, Total: {}",
        response.phase,
        response.state,
        response.remaining,
        Remaining::new(response.past),
        Remaining::new(response.total),
    )
}

/// An error type for parsing an [`Input`].
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseInputError {
    #[snafu(display("Unknown input {input:?}, expected one of p, s, ?, q"))]
    Unknown { input: String },
}

/// An error type for running the console.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConsoleError {
    #[snafu(display("Could not read from console"))]
    Read { source: IoError },
    #[snafu(display("Could not send request to timer"))]
    Request { source: RequestTimerError },
}
