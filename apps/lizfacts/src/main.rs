//! # lizfacts
//!
//! External fact executable for LizardFS hosts.
//!
//! Dropped into an inventory tool's external-facts directory, the binary is
//! executed with no arguments and publishes its facts on stdout. See
//! [`lizfacts::cli`] for the commands behind the surface.

use clap::{Parser, Subcommand};
use lizfacts::cli::{self, CliError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "lizfacts", version, about = "Validated LizardFS host facts")]
struct Cli {
    /// Output machine-readable JSON instead of name=VALUE lines.
    #[arg(long, global = true)]
    json: bool,

    /// Read the personality state file from an alternate location.
    #[arg(long, global = true, value_name = "PATH")]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect and print every registered fact (the default).
    Collect,
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match cli.command {
        // Zero arguments means collect: that is how the host invokes us.
        Some(Command::Collect) | None => cli::cmd_collect(cli.state_file.as_deref(), cli.json),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr: the host parses stdout.
///
/// Quiet by default; `RUST_LOG` raises verbosity without ever touching the
/// fact output.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
