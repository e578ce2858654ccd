use std::fmt::{Display, Formatter, Result as FmtResult};

use tokio::time::{Duration, Instant};

use crate::domain::outbound::Completion;
use crate::domain::timer::TimerContext;

/// Whether the countdown is ticking. Orthogonal to the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

impl Display for RunState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Running => f.write_str("Running"),
            Self::Paused => f.write_str("Paused"),
        }
    }
}

#[derive(Debug)]
#[repr(transparent)]
pub struct TimerState {
    inner: Option<TimerStateInner>,
}

impl TimerState {
    /// Creates a new [`TimerState`].
    pub fn new() -> Self {
        Self {
            inner: Some(TimerStateInner::new()),
        }
    }

    pub fn start(&mut self, context: &mut TimerContext, now: Instant) {
        self.transit(|inner| inner.start(context, now));
    }

    pub fn toggle(&mut self, context: &mut TimerContext, now: Instant) {
        self.transit(|inner| inner.toggle(context, now));
    }

    pub fn tick(&mut self, context: &mut TimerContext, now: Instant) {
        self.transit(|inner| inner.tick(context, now));
    }

    pub fn stop(&mut self, context: &mut TimerContext, now: Instant) {
        self.transit(|inner| inner.stop(context, now));
    }

    /// Time left in the current phase as of `now`.
    pub fn remaining(&self, context: &TimerContext, now: Instant) -> Duration {
        self.inner().remaining(context, now)
    }

    /// Returns the [`RunState`] of this [`TimerState`].
    pub fn run_state(&self) -> RunState {
        match self.inner() {
            TimerStateInner::Idle(_) => RunState::Idle,
            TimerStateInner::Running(_) => RunState::Running,
            TimerStateInner::Paused(_) => RunState::Paused,
        }
    }

    fn inner(&self) -> &TimerStateInner {
        match &self.inner {
            Some(inner) => inner,
            None => unreachable!("`TimerState`'s inner should not be `None`"),
        }
    }

    fn transit<F>(&mut self, f: F)
    where
        F: FnOnce(TimerStateInner) -> TimerStateInner,
    {
        self.inner = match self.inner.take() {
            Some(inner) => Some(f(inner)),
            None => unreachable!("`TimerState`'s inner should not be `None`"),
        };
    }
}

#[enum_dispatch::enum_dispatch]
trait StateTransition {
    fn start(self, context: &mut TimerContext, now: Instant) -> TimerStateInner;
    fn toggle(self, context: &mut TimerContext, now: Instant) -> TimerStateInner;
    fn tick(self, context: &mut TimerContext, now: Instant) -> TimerStateInner;
    fn stop(self, context: &mut TimerContext, now: Instant) -> TimerStateInner;
    fn remaining(&self, context: &TimerContext, now: Instant) -> Duration;
}

/// Actual implementation of the run states of [`IntervalTimer`].
///
/// [`IntervalTimer`]: crate::domain::timer::IntervalTimer
#[derive(Debug)]
#[enum_dispatch::enum_dispatch(StateTransition)]
enum TimerStateInner {
    Idle(IdleState),
    Running(RunningState),
    Paused(PausedState),
}

impl TimerStateInner {
    pub fn new() -> Self {
        Self::Idle(IdleState)
    }
}

/// Not started yet, or the previous phase ran out. The phase is shown with
/// its full duration.
#[derive(Debug)]
struct IdleState;

impl StateTransition for IdleState {
    fn start(self, context: &mut TimerContext, now: Instant) -> TimerStateInner {
        let total = context.total();
        tracing::info!(phase = %context.phase, ?total, "Started phase");
        context.publish(&context.snapshot(total, true));

        RunningState {
            start: now,
            past: Duration::ZERO,
        }
        .into()
    }

    fn toggle(self, context: &mut TimerContext, now: Instant) -> TimerStateInner {
        self.start(context, now)
    }

    fn tick(self, _context: &mut TimerContext, _now: Instant) -> TimerStateInner {
        tracing::trace!("Ignored tick while idle");
        self.into()
    }

    fn stop(self, _context: &mut TimerContext, _now: Instant) -> TimerStateInner {
        self.into()
    }

    fn remaining(&self, context: &TimerContext, _now: Instant) -> Duration {
        context.total()
    }
}

/// Counting down. `past` is the time spent in this phase before `start`,
/// accumulated over earlier pause/resume cycles.
#[derive(Debug)]
struct RunningState {
    start: Instant,
    past: Duration,
}

impl RunningState {
    fn past(&self, now: Instant) -> Duration {
        self.past + now.saturating_duration_since(self.start)
    }
}

impl StateTransition for RunningState {
    fn start(self, _context: &mut TimerContext, _now: Instant) -> TimerStateInner {
        tracing::debug!("Ignored start while running");
        self.into()
    }

    fn toggle(self, context: &mut TimerContext, now: Instant) -> TimerStateInner {
        let past = self.past(now).min(context.total());
        let remaining = context.total() - past;
        tracing::info!(phase = %context.phase, ?remaining, "Paused phase");
        context.publish(&context.snapshot(remaining, false));

        PausedState { past }.into()
    }

    fn tick(self, context: &mut TimerContext, now: Instant) -> TimerStateInner {
        let remaining = self.remaining(context, now);

        if !remaining.is_zero() {
            context.publish(&context.snapshot(remaining, true));
            return self.into();
        }

        let finished = context.phase;
        context.phase = finished.next();
        tracing::info!(%finished, next = %context.phase, "Completed phase");

        let completion = Completion {
            finished,
            next: context.snapshot(context.total(), false),
        };
        context.publish_completion(&completion);

        IdleState.into()
    }

    fn stop(self, context: &mut TimerContext, _now: Instant) -> TimerStateInner {
        tracing::info!(phase = %context.phase, "Stopped phase");
        context.publish(&context.snapshot(context.total(), false));
        IdleState.into()
    }

    fn remaining(&self, context: &TimerContext, now: Instant) -> Duration {
        context.total().saturating_sub(self.past(now))
    }
}

/// Suspended. The time gone by in this phase is kept for resuming.
#[derive(Debug)]
struct PausedState {
    past: Duration,
}

impl StateTransition for PausedState {
    fn start(self, _context: &mut TimerContext, _now: Instant) -> TimerStateInner {
        tracing::debug!("Ignored start while paused");
        self.into()
    }

    fn toggle(self, context: &mut TimerContext, now: Instant) -> TimerStateInner {
        let remaining = self.remaining(context, now);
        tracing::info!(phase = %context.phase, ?remaining, "Resumed phase");
        context.publish(&context.snapshot(remaining, true));

        RunningState {
            start: now,
            past: self.past,
        }
        .into()
    }

    fn tick(self, _context: &mut TimerContext, _now: Instant) -> TimerStateInner {
        tracing::trace!("Ignored tick while paused");
        self.into()
    }

    fn stop(self, context: &mut TimerContext, _now: Instant) -> TimerStateInner {
        tracing::info!(phase = %context.phase, "Stopped phase");
        context.publish(&context.snapshot(context.total(), false));
        IdleState.into()
    }

    fn remaining(&self, context: &TimerContext, _now: Instant) -> Duration {
        context.total().saturating_sub(self.past)
    }
}
