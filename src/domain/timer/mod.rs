//! The countdown state machine alternating between work and rest phases.
//!
//! [`IntervalTimer`] is driven from outside: a scheduler calls
//! [`IntervalTimer::tick`] periodically while the timer is running, and user
//! input calls [`IntervalTimer::toggle`]. Remaining time is measured as a
//! monotonic clock delta, so the tick cadence only affects how often updates
//! are published, never how fast the countdown goes.

mod notifier;
mod state;

pub use notifier::CompletionNotifier;
pub use state::RunState;

use std::sync::Arc;

use tokio::time::{Duration, Instant};

use crate::domain::entity::{Phase, PhaseDuration, Remaining};
use crate::domain::outbound::{Completion, TimerUpdate, UpdatePort};

use state::TimerState;

/// Durations of both phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub work: PhaseDuration,
    pub rest: PhaseDuration,
}

impl TimerConfig {
    /// Get the duration corresponding to phase.
    pub fn duration(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Work => self.work.inner(),
            Phase::Rest => self.rest.inner(),
        }
    }
}

/// Everything the run states read or mutate besides their own data.
pub struct TimerContext {
    pub config: TimerConfig,
    pub phase: Phase,
    observers: Vec<Arc<dyn UpdatePort>>,
}

impl TimerContext {
    fn new(config: TimerConfig) -> Self {
        Self {
            config,
            phase: Phase::initial(),
            observers: Vec::new(),
        }
    }

    /// Full duration of the current phase.
    fn total(&self) -> Duration {
        self.config.duration(self.phase)
    }

    fn snapshot(&self, remaining: Duration, running: bool) -> TimerUpdate {
        TimerUpdate {
            phase: self.phase,
            remaining: Remaining::new(remaining),
            total: self.total(),
            running,
        }
    }

    fn publish(&self, update: &TimerUpdate) {
        for observer in &self.observers {
            observer.update(update);
        }
    }

    fn publish_completion(&self, completion: &Completion) {
        for observer in &self.observers {
            observer.complete(completion);
        }
    }
}

/// A work/rest countdown timer with pause and resume.
///
/// Finishing a phase flips to the other one and stops; the next phase only
/// begins with another [`start`](Self::start) or [`toggle`](Self::toggle).
pub struct IntervalTimer {
    context: TimerContext,
    state: TimerState,
}

impl IntervalTimer {
    /// Creates a new [`IntervalTimer`], idle in the work phase.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            context: TimerContext::new(config),
            state: TimerState::new(),
        }
    }

    /// Register an observer for all subsequent updates.
    pub fn subscribe(&mut self, observer: Arc<dyn UpdatePort>) {
        self.context.observers.push(observer);
    }

    /// Begin counting down the current phase. Does nothing unless idle.
    pub fn start(&mut self) {
        self.state.start(&mut self.context, Instant::now());
    }

    /// Start when idle, pause when running, resume when paused.
    pub fn toggle(&mut self) {
        self.state.toggle(&mut self.context, Instant::now());
    }

    /// Refresh the remaining time and complete the phase once it runs out.
    /// Does nothing unless running.
    pub fn tick(&mut self) {
        self.state.tick(&mut self.context, Instant::now());
    }

    /// Abandon the current countdown and go back to idle in the same phase.
    pub fn stop(&mut self) {
        self.state.stop(&mut self.context, Instant::now());
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.context.phase
    }

    /// Returns the time left in the current phase.
    pub fn remaining(&self) -> Duration {
        self.state.remaining(&self.context, Instant::now())
    }

    /// Returns the [`RunState`] of this [`IntervalTimer`].
    pub fn run_state(&self) -> RunState {
        self.state.run_state()
    }

    /// Returns `true` if the countdown is ticking.
    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    /// Returns the current state as a [`TimerUpdate`].
    pub fn update(&self) -> TimerUpdate {
        self.context.snapshot(self.remaining(), self.is_running())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use tokio::time::advance;

    use crate::domain::outbound::MockUpdatePort;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Update(TimerUpdate),
        Complete(Completion),
    }

    struct Recorder {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl Recorder {
        fn new() -> (Arc<dyn UpdatePort>, Arc<Mutex<Vec<Event>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            let res = Self {
                events: Arc::clone(&events),
            };
            (Arc::new(res), events)
        }
    }

    impl UpdatePort for Recorder {
        fn update(&self, update: &TimerUpdate) {
            self.events.lock().unwrap().push(Event::Update(*update));
        }

        fn complete(&self, completion: &Completion) {
            self.events.lock().unwrap().push(Event::Complete(*completion));
        }
    }

    fn new_timer(work: u64, rest: u64) -> (IntervalTimer, Arc<Mutex<Vec<Event>>>) {
        let config = TimerConfig {
            work: PhaseDuration::try_new(work).unwrap(),
            rest: PhaseDuration::try_new(rest).unwrap(),
        };
        let mut timer = IntervalTimer::new(config);
        let (recorder, events) = Recorder::new();
        timer.subscribe(recorder);
        (timer, events)
    }

    async fn tick_seconds(timer: &mut IntervalTimer, seconds: u64) {
        for _ in 0..seconds {
            advance(Duration::from_secs(1)).await;
            timer.tick();
        }
    }

    fn completions(events: &Mutex<Vec<Event>>) -> Vec<Completion> {
        events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                Event::Complete(completion) => Some(*completion),
                Event::Update(_) => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn new_timer_is_idle_in_work() {
        let (timer, events) = new_timer(1500, 300);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.run_state(), RunState::Idle);
        assert_eq!(timer.remaining(), Duration::from_secs(1500));
        assert_eq!(timer.update().remaining_text(), "25:00");
        assert!(events.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn start_publishes_running_update() {
        let config = TimerConfig {
            work: PhaseDuration::try_new(10).unwrap(),
            rest: PhaseDuration::try_new(5).unwrap(),
        };
        let mut mock = MockUpdatePort::new();
        mock.expect_update()
            .withf(|update| update.running && update.remaining_text() == "00:10")
            .times(1)
            .return_const(());

        let mut timer = IntervalTimer::new(config);
        timer.subscribe(Arc::new(mock));
        timer.start();
        timer.start();
    }

    #[tokio::test(start_paused = true)]
    async fn work_then_rest_scenario() {
        let (mut timer, events) = new_timer(10, 5);
        timer.start();
        assert!(timer.is_running());

        tick_seconds(&mut timer, 9).await;
        assert_eq!(timer.remaining(), Duration::from_secs(1));
        assert_eq!(timer.phase(), Phase::Work);

        tick_seconds(&mut timer, 1).await;
        assert_eq!(timer.phase(), Phase::Rest);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), Duration::from_secs(5));
        assert_eq!(
            completions(&events),
            vec![Completion {
                finished: Phase::Work,
                next: TimerUpdate {
                    phase: Phase::Rest,
                    remaining: Remaining::new(Duration::from_secs(5)),
                    total: Duration::from_secs(5),
                    running: false,
                },
            }]
        );

        timer.toggle();
        assert!(timer.is_running());
        assert_eq!(timer.phase(), Phase::Rest);
        assert_eq!(timer.remaining(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_reaches_zero_before_flip() {
        for seconds in [1, 7, 60] {
            let (mut timer, _) = new_timer(seconds, 3);
            timer.start();
            advance(Duration::from_secs(seconds)).await;
            assert_eq!(timer.remaining(), Duration::ZERO);
            assert_eq!(timer.phase(), Phase::Work);

            timer.tick();
            assert_eq!(timer.phase(), Phase::Rest);
            assert!(!timer.is_running());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_twice_loses_no_time() {
        let (mut timer, _) = new_timer(10, 5);
        timer.start();
        tick_seconds(&mut timer, 3).await;

        timer.toggle();
        timer.toggle();
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), Duration::from_secs(7));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_freezes_remaining() {
        let (mut timer, events) = new_timer(10, 5);
        timer.start();
        tick_seconds(&mut timer, 3).await;

        timer.toggle();
        assert_eq!(timer.run_state(), RunState::Paused);
        let published = events.lock().unwrap().len();

        tick_seconds(&mut timer, 100).await;
        assert_eq!(timer.remaining(), Duration::from_secs(7));
        assert_eq!(events.lock().unwrap().len(), published);

        timer.toggle();
        tick_seconds(&mut timer, 6).await;
        assert_eq!(timer.phase(), Phase::Work);
        tick_seconds(&mut timer, 1).await;
        assert_eq!(timer.phase(), Phase::Rest);
    }

    #[tokio::test(start_paused = true)]
    async fn sub_second_ticks_truncate_display() {
        let (mut timer, events) = new_timer(10, 5);
        timer.start();
        advance(Duration::from_millis(1500)).await;
        timer.tick();

        let last = events.lock().unwrap().last().cloned();
        match last {
            Some(Event::Update(update)) => {
                assert_eq!(update.remaining_text(), "00:08");
                assert_eq!(update.remaining_seconds(), 8.5);
                assert!(update.running);
            }
            _ => unreachable!(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn phases_alternate() {
        let (mut timer, events) = new_timer(4, 2);

        for _ in 0..4 {
            timer.start();
            let total = timer.remaining().as_secs();
            tick_seconds(&mut timer, total).await;
            assert!(!timer.is_running());
        }

        let finished: Vec<_> = completions(&events)
            .into_iter()
            .map(|completion| completion.finished)
            .collect();
        assert_eq!(
            finished,
            vec![Phase::Work, Phase::Rest, Phase::Work, Phase::Rest]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_ignored_unless_idle() {
        let (mut timer, _) = new_timer(10, 5);
        timer.start();
        tick_seconds(&mut timer, 2).await;

        timer.start();
        assert_eq!(timer.remaining(), Duration::from_secs(8));

        timer.toggle();
        timer.start();
        assert_eq!(timer.run_state(), RunState::Paused);
        assert_eq!(timer.remaining(), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn tick_while_idle_is_ignored() {
        let (mut timer, events) = new_timer(10, 5);
        tick_seconds(&mut timer, 3).await;
        assert_eq!(timer.run_state(), RunState::Idle);
        assert_eq!(timer.remaining(), Duration::from_secs(10));
        assert!(events.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_resets_current_phase() {
        let (mut timer, events) = new_timer(10, 5);
        timer.start();
        tick_seconds(&mut timer, 4).await;

        timer.stop();
        assert_eq!(timer.run_state(), RunState::Idle);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.remaining(), Duration::from_secs(10));
        assert!(matches!(
            events.lock().unwrap().last(),
            Some(Event::Update(TimerUpdate { running: false, .. }))
        ));
    }
}
