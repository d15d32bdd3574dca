//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for pep257 commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `file:line:column: CODE message` lines
    Text,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the actual stdout
    pub fn for_stdout(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

/// pep257 CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "pep257")]
#[command(about = "Check Python docstrings against PEP 257 conventions")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available pep257 subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check docstrings in files, directories or stdin (`-`)
    Check {
        /// Paths to check (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exit with status 0 even when violations are found
        #[arg(long)]
        exit_zero: bool,

        /// Number of worker threads (defaults to the number of CPUs)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Directory searched for tox.ini, setup.cfg and .pep257
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },

    /// List all rule codes and whether they are enabled
    List {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Directory searched for tox.ini, setup.cfg and .pep257
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_default_args() {
        let cli = Cli::parse_from(["pep257", "check"]);
        match cli.command {
            Command::Check {
                paths,
                format,
                exit_zero,
                jobs,
                config_dir,
            } => {
                assert_eq!(paths, vec!["."]);
                assert_eq!(format, OutputFormat::Text);
                assert!(!exit_zero);
                assert_eq!(jobs, None);
                assert_eq!(config_dir, None);
            }
            _ => panic!("Expected Check command"),
        }
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_check_with_paths_and_stdin() {
        let cli = Cli::parse_from(["pep257", "check", "src/", "-", "setup.py"]);
        match cli.command {
            Command::Check { paths, .. } => {
                assert_eq!(paths, vec!["src/", "-", "setup.py"]);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_options() {
        let cli = Cli::parse_from([
            "pep257",
            "check",
            "-f",
            "jsonl",
            "--exit-zero",
            "-j",
            "4",
            "--config-dir",
            "project",
        ]);
        match cli.command {
            Command::Check {
                format,
                exit_zero,
                jobs,
                config_dir,
                ..
            } => {
                assert_eq!(format, OutputFormat::Jsonl);
                assert!(exit_zero);
                assert_eq!(jobs, Some(4));
                assert_eq!(config_dir, Some(PathBuf::from("project")));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_list_default() {
        let cli = Cli::parse_from(["pep257", "list"]);
        match cli.command {
            Command::List { format, config_dir } => {
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(config_dir, None);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_list_short_format() {
        let cli = Cli::parse_from(["pep257", "list", "-f", "jsonl"]);
        match cli.command {
            Command::List { format, .. } => {
                assert_eq!(format, OutputFormat::Jsonl);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["pep257", "--color", "always", "check"]);
        assert_eq!(cli.color, ColorChoice::Always);

        let cli = Cli::parse_from(["pep257", "list", "--color", "never", "-v"]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.verbose);
    }

    #[test]
    fn test_explicit_color_choices() {
        assert_eq!(
            ColorChoice::Always.for_stdout(),
            termcolor::ColorChoice::Always
        );
        assert_eq!(ColorChoice::Never.for_stdout(), termcolor::ColorChoice::Never);
    }

    #[test]
    fn test_help_contains_about() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("PEP 257"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(Cli::try_parse_from(["pep257", "check", "--format", "human"]).is_err());
        assert!(Cli::try_parse_from(["pep257", "--color", "invalid", "check"]).is_err());
        assert!(Cli::try_parse_from(["pep257", "check", "--jobs", "many"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        // --version exits through clap's DisplayVersion error
        assert!(Cli::try_parse_from(["pep257", "--version"]).is_err());
    }
}
