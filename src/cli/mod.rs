//! Command-line parsing for the team rank averager.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the parsing/scale code.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "rank-avg",
    version,
    about = "Посчитать среднее звание команды VALORANT по 5 входным званиям."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Average five ranks and print a report (the default command).
    Avg(AvgArgs),
    /// Print the full numeric scale.
    Scale(RadiantArgs),
    /// Launch the interactive TUI.
    Tui(RadiantArgs),
}

/// Options for `avg`.
#[derive(Debug, Args, Clone)]
pub struct AvgArgs {
    /// Five ranks separated by commas or spaces,
    /// e.g. "д1, а1, б1, с1, г1" or "diamond2 ascendant3 иммо1 gold3 platinum1".
    /// Prompts for each rank when omitted.
    #[arg(short = 'r', long)]
    pub ranks: Option<String>,

    #[command(flatten)]
    pub radiant: RadiantArgs,

    /// Report format.
    #[arg(long, value_enum, env = "RANK_AVG_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// The mutually exclusive Radiant switches.
#[derive(Debug, Args, Clone, Default)]
pub struct RadiantArgs {
    /// Include Radiant as the top of the scale (default).
    #[arg(long, conflicts_with = "exclude_radiant")]
    pub include_radiant: bool,

    /// Exclude Radiant: it counts as Immortal 3.
    #[arg(long)]
    pub exclude_radiant: bool,
}

impl RadiantArgs {
    /// Resolve the flags against the configured default.
    pub fn include_radiant(&self, default: bool) -> bool {
        if self.exclude_radiant {
            false
        } else if self.include_radiant {
            true
        } else {
            default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Split a `--ranks` value into individual tokens.
///
/// Commas win when present (so `"алмаз 1, золото 2"` keeps the inner spaces);
/// otherwise the value is split on whitespace. Empty fragments are dropped.
pub fn split_ranks_arg(arg: &str) -> Vec<String> {
    let parts: Vec<&str> = if arg.contains(',') {
        arg.split(',').map(str::trim).collect()
    } else {
        arg.split_whitespace().collect()
    };
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_first() {
        assert_eq!(
            split_ranks_arg("алмаз 1, золото 2,, г1 ,"),
            vec!["алмаз 1", "золото 2", "г1"]
        );
    }

    #[test]
    fn falls_back_to_whitespace() {
        assert_eq!(
            split_ranks_arg("  diamond2 ascendant3\tиммо1  gold3 platinum1 "),
            vec!["diamond2", "ascendant3", "иммо1", "gold3", "platinum1"]
        );
    }

    #[test]
    fn empty_value_yields_nothing() {
        assert!(split_ranks_arg("   ").is_empty());
        assert!(split_ranks_arg(" , ,").is_empty());
    }

    #[test]
    fn radiant_flags_resolve_against_default() {
        let none = RadiantArgs::default();
        assert!(none.include_radiant(true));
        assert!(!none.include_radiant(false));

        let exclude = RadiantArgs {
            exclude_radiant: true,
            ..RadiantArgs::default()
        };
        assert!(!exclude.include_radiant(true));

        let include = RadiantArgs {
            include_radiant: true,
            ..RadiantArgs::default()
        };
        assert!(include.include_radiant(false));
    }

    #[test]
    fn radiant_flags_conflict() {
        let res = Cli::try_parse_from([
            "rank-avg",
            "avg",
            "--include-radiant",
            "--exclude-radiant",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn parses_avg_args() {
        let cli = Cli::try_parse_from([
            "rank-avg",
            "avg",
            "--ranks",
            "д1 д1 д1 д1 д1",
            "--exclude-radiant",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Avg(args) = cli.command else {
            panic!("expected avg");
        };
        assert_eq!(args.ranks.as_deref(), Some("д1 д1 д1 д1 д1"));
        assert!(args.radiant.exclude_radiant);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
