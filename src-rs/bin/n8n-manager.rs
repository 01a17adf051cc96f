use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use n8n_manager::cli::{dispatch, Cli};
use n8n_manager::{ManagerConfig, N8nClient};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let config = match ManagerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let client = match N8nClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            println!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&client, &command, &mut out);
    ExitCode::SUCCESS
}
