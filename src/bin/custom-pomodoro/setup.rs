use std::sync::Arc;

use custom_pomodoro::domain::inbound::QueryResponse;
use custom_pomodoro::domain::outbound::{NotifyPort, TimerUpdate, UpdatePort};
use custom_pomodoro::domain::timer::RunState;
use custom_pomodoro::domain::ApplicationCore;
use custom_pomodoro::terminal::config::{self, Configuration};
use custom_pomodoro::terminal::outbound::{NotifyService, TerminalView};
use custom_pomodoro::terminal::repository::{DurationConfiguration, NotificationConfiguration};
use snafu::{prelude::*, Whatever};
use tracing::Level;

use crate::cli::Arguments;

const APP_NAME: &str = "custom-pomodoro";

pub fn logger(verbosity: Level) -> Result<(), Whatever> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(verbosity)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .whatever_context("Could not setup logger")?;
    Ok(())
}

pub async fn bootstrap(args: &Arguments) -> Result<Arc<ApplicationCore>, Whatever> {
    let configuration = configuration(args)?;
    let view = Arc::new(TerminalView::stdout());
    let core = core(args, configuration, Arc::clone(&view) as Arc<dyn UpdatePort>).await?;

    let response = core
        .query
        .query()
        .await
        .whatever_context("Could not query timer")?;
    println!("Press enter to start or pause, `?` for status, `q` to quit.");
    view.update(&initial_update(&response));

    Ok(Arc::new(core))
}

fn configuration(args: &Arguments) -> Result<Arc<Configuration>, Whatever> {
    let res = match &args.config {
        Some(path) => config::load_with_path(path),
        None => config::load_with_xdg(APP_NAME),
    };

    let configuration = res.whatever_context("Could not load configuration")?;
    tracing::debug!(?configuration, "Loaded configuration");
    Ok(Arc::new(configuration))
}

async fn core(
    args: &Arguments,
    config: Arc<Configuration>,
    view: Arc<dyn UpdatePort>,
) -> Result<ApplicationCore, Whatever> {
    let notify_port = (config.notification.enabled && !args.no_notify)
        .then(|| Arc::new(NotifyService::new(APP_NAME.to_owned())) as Arc<dyn NotifyPort>);
    let duration_repository = Arc::new(DurationConfiguration::new(Arc::clone(&config)));
    let notification_repository = Arc::new(NotificationConfiguration::new(config));

    let core = ApplicationCore::setup(
        duration_repository,
        notification_repository,
        notify_port,
        vec![view],
    )
    .await
    .whatever_context("Could not setup application core")?;

    Ok(core)
}

fn initial_update(response: &QueryResponse) -> TimerUpdate {
    TimerUpdate {
        phase: response.phase,
        remaining: response.remaining,
        total: response.total,
        running: response.state == RunState::Running,
    }
}
