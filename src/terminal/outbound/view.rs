use std::io::{Stdout, Write};
use std::sync::Mutex;

use crate::domain::outbound::{Completion, TimerUpdate, UpdatePort};

const BAR_WIDTH: usize = 20;
const CLEAR_LINE: &str = "\r\x1b[2K";

/// An [`UpdatePort`] which keeps a one-line status of the timer on a
/// terminal, e.g. `Work 24:59 [#-------------------] ⏸`.
pub struct TerminalView<W> {
    writer: Mutex<W>,
}

impl TerminalView<Stdout> {
    /// Creates a [`TerminalView`] writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send + 'static> TerminalView<W> {
    /// Creates a new [`TerminalView`].
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes this [`TerminalView`], returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self, text: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let res = writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.flush());

        if let Err(err) = res {
            tracing::warn!(%err, "Could not write to terminal");
        }
    }
}

impl<W: Write + Send + 'static> UpdatePort for TerminalView<W> {
    fn update(&self, update: &TimerUpdate) {
        self.write(&format!("{CLEAR_LINE}{}", render(update)));
    }

    fn complete(&self, completion: &Completion) {
        self.write(&format!(
            "{CLEAR_LINE}{} finished\n{}",
            completion.finished,
            render(&completion.next)
        ));
    }
}

/// Render the status line of one [`TimerUpdate`]. The bar fills up as the
/// phase goes by; the icon is the action the play/pause control would do.
pub fn render(update: &TimerUpdate) -> String {
    let filled = ((update.progress() * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
    let icon = if update.running { "⏸" } else { "▶" };

    format!(
        "{:<4} {} [{}{}] {}",
        update.phase.to_string(),
        update.remaining_text(),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        icon,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::domain::entity::{Phase, Remaining};

    fn new_update(phase: Phase, remaining: u64, total: u64, running: bool) -> TimerUpdate {
        TimerUpdate {
            phase,
            remaining: Remaining::new(Duration::from_secs(remaining)),
            total: Duration::from_secs(total),
            running,
        }
    }

    #[test]
    fn render_status_line() {
        assert_eq!(
            render(&new_update(Phase::Work, 1500, 1500, false)),
            "Work 25:00 [--------------------] ▶"
        );
        assert_eq!(
            render(&new_update(Phase::Rest, 150, 300, true)),
            "Rest 02:30 [##########----------] ⏸"
        );
        assert_eq!(
            render(&new_update(Phase::Work, 0, 10, true)),
            "Work 00:00 [####################] ⏸"
        );
    }

    #[test]
    fn terminal_view_writes() {
        let view = TerminalView::new(Vec::new());
        view.update(&new_update(Phase::Work, 5, 10, true));
        view.complete(&Completion {
            finished: Phase::Work,
            next: new_update(Phase::Rest, 5, 5, false),
        });

        let output = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(
            output,
            format!(
                "{CLEAR_LINE}Work 00:05 [##########----------] ⏸\
                 {CLEAR_LINE}Work finished\n\
                 Rest 00:05 [--------------------] ▶"
            )
        );
    }
}
