use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Path to a custom configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Maximum logging level the subscriber should use
    #[arg(short, long, default_value_t = Level::WARN)]
    pub verbosity: Level,
    /// Start the first work phase right away
    #[arg(short, long)]
    pub autostart: bool,
    /// Disable desktop notifications regardless of the configuration
    #[arg(long)]
    pub no_notify: bool,
}
