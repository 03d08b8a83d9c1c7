use std::process::ExitCode;

use clap::Parser;
use quad_lessons::{Cli, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init()
    {
        eprintln!("Warning: Could not initialize logger: {}", e);
    }

    let result = Settings::from_cli(cli)
        .map_err(quad_lessons::AppError::from)
        .and_then(quad_lessons::run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            // -1 as seen by the shell
            ExitCode::from(255)
        }
    }
}
