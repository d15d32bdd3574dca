//! pep257 CLI entry point

use clap::Parser;
use pep257::cli::{CheckOptions, Cli, Command};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Command::Check {
            paths,
            format,
            exit_zero,
            jobs,
            config_dir,
        } => pep257::cli::run_check(&CheckOptions {
            paths,
            format,
            exit_zero,
            jobs,
            config_dir,
            color: cli.color,
        }),
        Command::List { format, config_dir } => {
            pep257::cli::run_list(format, config_dir.as_deref())
        }
    };

    process::exit(exit_code);
}
