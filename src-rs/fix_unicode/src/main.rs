use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_TARGET: &str = "client/AppRoutes.jsx";

#[derive(Parser)]
#[command(name = "fix-unicode")]
#[command(about = "Replace literal \\u003c / \\u003e escapes in a file with < and >")]
struct Args {
    /// File to rewrite in place
    #[arg(default_value = DEFAULT_TARGET)]
    path: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    match fix_unicode::fix_file(&args.path) {
        Ok(_) => {
            println!("Unicode escape sequences replaced successfully.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
