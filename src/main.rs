use clap::Parser;
use ngxstat::app::{self, Outcome};
use ngxstat::cli::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = cli.load_config()?;
    let settings = cli.settings(&config)?;
    tracing::debug!(?settings, "resolved settings");

    match app::run(&settings) {
        Outcome::Report(report) => {
            print!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::NoData => {
            println!("{}", app::NO_DATA_MESSAGE);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::SourceFailed(err) => {
            eprintln!("ngxstat: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
