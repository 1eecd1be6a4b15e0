//! CLI commands and argument parsing

use crate::error::{Error, Result};
use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// List pagination engine CLI
#[derive(Parser, Debug)]
#[command(name = "list-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level (overridden by RUST_LOG directives)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive pagination from list metadata and print it
    Show {
        #[command(flatten)]
        metadata: MetadataArgs,
    },

    /// Apply navigation actions in order and print the result
    Navigate {
        #[command(flatten)]
        metadata: MetadataArgs,

        /// Actions to apply (next, prev, first)
        #[arg(required = true, num_args = 1..)]
        actions: Vec<Action>,

        /// Print the state after every action
        #[arg(long)]
        trace: bool,
    },

    /// Interactive session reading commands from stdin
    Repl {
        #[command(flatten)]
        metadata: MetadataArgs,
    },
}

/// Where list metadata comes from
#[derive(Args, Debug, Clone, Default)]
pub struct MetadataArgs {
    /// Total item count
    #[arg(short, long, allow_negative_numbers = true)]
    pub total: Option<i64>,

    /// Items per page
    #[arg(short, long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,

    /// Active page (0 or omitted means the first page)
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    pub current_page: Option<i64>,

    /// Metadata file (YAML or JSON)
    #[arg(short, long, conflicts_with_all = ["total", "per_page", "metadata_json"])]
    pub metadata: Option<PathBuf>,

    /// Inline metadata JSON
    #[arg(long, conflicts_with_all = ["total", "per_page"])]
    pub metadata_json: Option<String>,
}

impl MetadataArgs {
    /// Check whether any metadata source was given
    pub fn is_empty(&self) -> bool {
        self.total.is_none()
            && self.per_page.is_none()
            && self.metadata.is_none()
            && self.metadata_json.is_none()
    }
}

/// Navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    /// Next page
    #[value(alias = "advance")]
    Next,
    /// Previous page
    #[value(aliases = ["previous", "retreat"])]
    Prev,
    /// First page
    #[value(alias = "reset")]
    First,
}

/// Command accepted by the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Re-derive state: `init <total> <per_page> [current_page]`
    Init {
        total: i64,
        per_page: i64,
        current_page: Option<i64>,
    },
    /// Apply a navigation action
    Navigate(Action),
    /// Print the current state
    Show,
    /// Print available commands
    Help,
    /// End the session
    Quit,
}

impl ReplCommand {
    /// Usage text for the interactive session
    pub const HELP: &'static str = "commands: init <total> <per_page> [current_page] | next | prev | first | show | help | quit";
}

impl FromStr for ReplCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let no_args = |parsed: Self| {
            if args.is_empty() {
                Ok(parsed)
            } else {
                Err(Error::invalid_arguments(&command, "takes no arguments"))
            }
        };

        match command.as_str() {
            "init" => parse_init(&args),
            "next" | "advance" => no_args(Self::Navigate(Action::Next)),
            "prev" | "previous" | "retreat" => no_args(Self::Navigate(Action::Prev)),
            "first" | "reset" => no_args(Self::Navigate(Action::First)),
            "show" => no_args(Self::Show),
            "help" | "?" => no_args(Self::Help),
            "quit" | "exit" => no_args(Self::Quit),
            other => Err(Error::unknown_command(other)),
        }
    }
}

fn parse_init(args: &[&str]) -> Result<ReplCommand> {
    if !(2..=3).contains(&args.len()) {
        return Err(Error::invalid_arguments(
            "init",
            format!("expected 2 or 3 numbers, got {}", args.len()),
        ));
    }

    let numbers = args
        .iter()
        .map(|arg| {
            arg.parse::<i64>()
                .map_err(|e| Error::invalid_arguments("init", format!("'{arg}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ReplCommand::Init {
        total: numbers[0],
        per_page: numbers[1],
        current_page: numbers.get(2).copied(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_negative_numbers() {
        let cli = Cli::parse_from(["list-pager", "show", "--total", "-4", "--per-page", "2"]);
        match cli.command {
            Commands::Show { metadata } => {
                assert_eq!(metadata.total, Some(-4));
                assert_eq!(metadata.per_page, Some(2));
                assert!(metadata.current_page.is_none());
            }
            other => panic!("Expected Show, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_navigate_actions() {
        let cli = Cli::parse_from([
            "list-pager", "--format", "pretty", "navigate", "-t", "10", "-p", "2", "next",
            "previous", "first",
        ]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::Navigate { actions, trace, .. } => {
                assert_eq!(actions, vec![Action::Next, Action::Prev, Action::First]);
                assert!(!trace);
            }
            other => panic!("Expected Navigate, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata_sources_conflict() {
        let result = Cli::try_parse_from([
            "list-pager", "show", "--metadata", "list.yaml", "--total", "4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repl_command_parsing() {
        assert_eq!(
            "init 10 2".parse::<ReplCommand>().unwrap(),
            ReplCommand::Init {
                total: 10,
                per_page: 2,
                current_page: None
            }
        );
        assert_eq!(
            "init -4 2 3".parse::<ReplCommand>().unwrap(),
            ReplCommand::Init {
                total: -4,
                per_page: 2,
                current_page: Some(3)
            }
        );
        assert_eq!(
            "  NEXT ".parse::<ReplCommand>().unwrap(),
            ReplCommand::Navigate(Action::Next)
        );
        assert_eq!(
            "previous".parse::<ReplCommand>().unwrap(),
            ReplCommand::Navigate(Action::Prev)
        );
        assert_eq!("quit".parse::<ReplCommand>().unwrap(), ReplCommand::Quit);
    }

    #[test]
    fn test_repl_command_errors() {
        assert!(matches!(
            "jump 3".parse::<ReplCommand>(),
            Err(Error::UnknownCommand { .. })
        ));
        assert!(matches!(
            "init 10".parse::<ReplCommand>(),
            Err(Error::InvalidArguments { .. })
        ));
        assert!(matches!(
            "init ten 2".parse::<ReplCommand>(),
            Err(Error::InvalidArguments { .. })
        ));
        assert!(matches!(
            "next 2".parse::<ReplCommand>(),
            Err(Error::InvalidArguments { .. })
        ));
    }
}
