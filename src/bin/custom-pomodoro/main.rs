mod cli;
mod setup;

use std::sync::Arc;

use clap::Parser;
use custom_pomodoro::terminal::console::Console;
use snafu::{prelude::*, Whatever};
use tokio::io::BufReader;

use crate::cli::Arguments;

#[snafu::report]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Whatever> {
    let args = Arguments::parse();
    setup::logger(args.verbosity)?;

    let core = setup::bootstrap(&args).await?;

    if args.autostart {
        core.start
            .start()
            .await
            .whatever_context("Could not start timer")?;
    }

    let console = Console::new(Arc::clone(&core));
    let res = console.run(BufReader::new(tokio::io::stdin())).await;

    core.stop
        .stop()
        .await
        .whatever_context("Could not stop timer")?;
    println!();

    res.whatever_context("Console failed")?;
    Ok(())
}
