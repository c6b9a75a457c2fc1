use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use chrono::{Local, NaiveDateTime};
use clap::Parser as _;
use climbing_tracker::{menu::Menu, Settings, Tracker};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, clap::Parser)]
#[command(about = "Log climbing and training sessions and summarise them")]
struct Cli {
    /// TOML file overriding thresholds and initial capacity.
    #[clap(long)]
    settings: Option<PathBuf>,
    /// Timestamp written into saved reports instead of the current time.
    #[clap(long)]
    today: Option<NaiveDateTime>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match Settings::load(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("🛑 {err}");
            return ExitCode::FAILURE;
        }
    };

    let now = cli.today.unwrap_or(Local::now().naive_local());
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let mut menu = Menu::new(stdin, stdout, Tracker::with_settings(&settings), now);
    match menu.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("🛑 {err}");
            ExitCode::FAILURE
        }
    }
}
