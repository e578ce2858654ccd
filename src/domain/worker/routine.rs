use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, Interval, MissedTickBehavior};

use crate::domain::outbound::UpdatePort;
use crate::domain::timer::{IntervalTimer, TimerConfig};
use crate::domain::worker::handle::{Command, QueryResponse};

/// A type that stores configurations required by [`WorkerRoutine`]
/// initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    pub timer: TimerConfig,
    pub tick_interval: Duration,
}

enum Event {
    Tick,
    Command(Option<Command>),
}

/// The scheduler of an [`IntervalTimer`]. A [`WorkerRoutine`] runs on
/// background, receiving [`Command`]s from [`WorkerHandle`] and ticking the
/// timer while it is running.
///
/// [`WorkerHandle`]: crate::domain::worker::WorkerHandle
pub struct WorkerRoutine {
    timer: IntervalTimer,
    commands: Receiver<Command>,
    tick_interval: Duration,
    ticker: Option<Interval>,
}

impl WorkerRoutine {
    /// Spawn a running [`WorkerRoutine`] on background.
    pub fn spawn(
        config: WorkerConfig,
        commands: Receiver<Command>,
        observers: Vec<Arc<dyn UpdatePort>>,
    ) -> JoinHandle<()> {
        let mut timer = IntervalTimer::new(config.timer);
        for observer in observers {
            timer.subscribe(observer);
        }

        tokio::spawn(async move {
            let mut worker = Self {
                timer,
                commands,
                tick_interval: config.tick_interval,
                ticker: None,
            };
            worker.run().await;
        })
    }

    /// Main part of its business logic.
    async fn run(&mut self) {
        loop {
            match self.next_event().await {
                Event::Tick => self.timer.tick(),
                Event::Command(Some(Command::Toggle)) => self.timer.toggle(),
                Event::Command(Some(Command::Start)) => self.timer.start(),
                Event::Command(Some(Command::Query { responder })) => {
                    let _ = responder.send(QueryResponse {
                        update: self.timer.update(),
                        state: self.timer.run_state(),
                    });
                }
                Event::Command(Some(Command::Stop { responder })) => {
                    self.shutdown();
                    let _ = responder.send(());
                    return;
                }
                Event::Command(None) => {
                    tracing::debug!("All handles dropped");
                    self.shutdown();
                    return;
                }
            }

            self.schedule();
        }
    }

    async fn next_event(&mut self) -> Event {
        match self.ticker.as_mut() {
            Some(ticker) => tokio::select! {
                _ = ticker.tick() => Event::Tick,
                command = self.commands.recv() => Event::Command(command),
            },
            None => Event::Command(self.commands.recv().await),
        }
    }

    /// Keep a tick subscription exactly while the timer is running.
    fn schedule(&mut self) {
        match (self.timer.is_running(), self.ticker.is_some()) {
            (true, false) => {
                tracing::debug!(period = ?self.tick_interval, "Subscribed to ticks");
                self.ticker = Some(new_ticker(self.tick_interval));
            }
            (false, true) => {
                tracing::debug!("Cancelled ticks");
                self.ticker = None;
            }
            _ => {}
        }
    }

    fn shutdown(&mut self) {
        self.timer.stop();
        self.ticker = None;
        tracing::info!("Timer worker exited");
    }
}

fn new_ticker(period: Duration) -> Interval {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
