//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

/// Top-level CLI parser for `chorus`.
#[derive(Debug, Parser)]
#[command(name = "chorus", version, about = "Run a fizzbuzz chorus on a worker thread")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Spawn the chorus worker and wait for it.
    Play(PlayArgs),
    /// Launch greeter threads from different kinds of entry points.
    Hello {
        /// Which entry point kind to launch.
        #[arg(long, value_enum, default_value_t = EntryKind::All)]
        entry: EntryKind,
    },
}

/// Flags for `chorus play`. Unset flags fall back to `CHORUS_*` variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct PlayArgs {
    /// Comma-separated players, in turn order.
    #[arg(long)]
    pub players: Option<String>,
    /// Stop after this many lines (runs forever when unset).
    #[arg(long)]
    pub limit: Option<u64>,
    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write a YAML transcript of the run to this path.
    #[arg(long)]
    pub record: Option<PathBuf>,
}

/// Kinds of thread entry point the `hello` demo can launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryKind {
    /// A plain function.
    Function,
    /// An object implementing the entry trait.
    Functor,
    /// A closure.
    Closure,
    /// All of the above, in that order.
    All,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, EntryKind};
    use crate::config::OutputFormat;
    use clap::Parser;

    #[test]
    fn parses_play_with_flags() {
        let cli = Cli::parse_from([
            "chorus", "play", "--limit", "15", "--players", "Ann,Bo", "--format", "json",
        ]);
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.limit, Some(15));
        assert_eq!(args.players.as_deref(), Some("Ann,Bo"));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.record.is_none());
    }

    #[test]
    fn parses_bare_play() {
        let cli = Cli::parse_from(["chorus", "play"]);
        assert!(matches!(cli.command, Command::Play(args) if args.limit.is_none()));
    }

    #[test]
    fn hello_defaults_to_all() {
        let cli = Cli::parse_from(["chorus", "hello"]);
        assert!(matches!(cli.command, Command::Hello { entry: EntryKind::All }));
    }

    #[test]
    fn rejects_non_numeric_limit() {
        assert!(Cli::try_parse_from(["chorus", "play", "--limit", "many"]).is_err());
    }
}
