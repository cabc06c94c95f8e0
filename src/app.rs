//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` configuration
//! - parses CLI arguments
//! - collects five ranks (from `--ranks` or interactive prompts)
//! - runs the averaging pipeline
//! - prints reports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{AvgArgs, Command, OutputFormat, RadiantArgs, split_ranks_arg};
use crate::domain::{DEFAULT_INCLUDE_RADIANT, TEAM_SIZE};
use crate::error::AppError;
use crate::rank::Scale;

pub mod pipeline;

/// Environment variable that flips the default to "Radiant excluded".
pub const EXCLUDE_RADIANT_ENV: &str = "RANK_AVG_EXCLUDE_RADIANT";

/// Entry point for the `rank-avg` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // We want `rank-avg` and `rank-avg --ranks ...` to behave like `rank-avg avg ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Avg(args) => {
            init_logging();
            handle_avg(args, env_default_include())
        }
        Command::Scale(args) => {
            init_logging();
            handle_scale(&args, env_default_include())
        }
        // The TUI owns the terminal, so no log output is installed for it.
        Command::Tui(args) => crate::tui::run(args.include_radiant(env_default_include())),
    }
}

fn env_default_include() -> bool {
    default_include_radiant(std::env::var(EXCLUDE_RADIANT_ENV).ok().as_deref())
}

/// Install a stderr `tracing` subscriber driven by `RUST_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_avg(args: AvgArgs, default_include: bool) -> Result<(), AppError> {
    let include_radiant = args.radiant.include_radiant(default_include);
    tracing::debug!(include_radiant, format = ?args.format, "averaging team ranks");

    let ranks = match &args.ranks {
        Some(value) => ranks_from_arg(value)?,
        None => crate::cli::prompt::prompt_for_ranks()?,
    };

    let details = pipeline::compute_average_details(&ranks, include_radiant).inspect_err(|err| {
        tracing::debug!(error = %err, "rank input rejected");
    })?;
    tracing::info!(
        average = details.average,
        family = details.final_rank.family().key(),
        final_label = %details.final_label,
        "computed team rank"
    );

    let out = match args.format {
        OutputFormat::Text => crate::report::format_report(&details),
        OutputFormat::Json => crate::report::format_report_json(&details)?,
    };
    println!("{out}");
    Ok(())
}

fn handle_scale(args: &RadiantArgs, default_include: bool) -> Result<(), AppError> {
    let scale = Scale::new(args.include_radiant(default_include));
    print!("{}", crate::report::format_scale_table(scale));
    Ok(())
}

/// Split `--ranks` and insist on exactly five fragments.
fn ranks_from_arg(value: &str) -> Result<Vec<String>, AppError> {
    let items = split_ranks_arg(value);
    tracing::debug!(?items, "split --ranks");
    if items.len() != TEAM_SIZE {
        return Err(AppError::usage(format!(
            "необходимо передать ровно {TEAM_SIZE} званий в --ranks, получено {}.",
            items.len()
        )));
    }
    Ok(items)
}

/// Interpret the exclude-Radiant environment value.
fn default_include_radiant(exclude_env: Option<&str>) -> bool {
    match exclude_env.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => false,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => true,
        Some(v) => {
            tracing::warn!(value = %v, "ignoring unrecognized {EXCLUDE_RADIANT_ENV}");
            DEFAULT_INCLUDE_RADIANT
        }
        None => DEFAULT_INCLUDE_RADIANT,
    }
}

/// Rewrite argv so `rank-avg` defaults to `rank-avg avg`.
///
/// Rules:
/// - `rank-avg`                      -> `rank-avg avg`
/// - `rank-avg --ranks "..." ...`    -> `rank-avg avg --ranks "..." ...`
/// - `rank-avg --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("avg".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "avg" | "scale" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "avg flags".
    if arg1.starts_with('-') {
        argv.insert(1, "avg".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_avg() {
        assert_eq!(rewrite_args(argv(&["rank-avg"])), argv(&["rank-avg", "avg"]));
    }

    #[test]
    fn leading_flags_run_avg() {
        assert_eq!(
            rewrite_args(argv(&["rank-avg", "--ranks", "д1 д1 д1 д1 д1"])),
            argv(&["rank-avg", "avg", "--ranks", "д1 д1 д1 д1 д1"])
        );
        assert_eq!(
            rewrite_args(argv(&["rank-avg", "--exclude-radiant"])),
            argv(&["rank-avg", "avg", "--exclude-radiant"])
        );
    }

    #[test]
    fn subcommands_and_help_untouched() {
        for args in [
            &["rank-avg", "scale"][..],
            &["rank-avg", "tui", "--exclude-radiant"][..],
            &["rank-avg", "--help"][..],
            &["rank-avg", "-V"][..],
        ] {
            assert_eq!(rewrite_args(argv(args)), argv(args));
        }
    }

    #[test]
    fn ranks_arg_must_have_five_items() {
        assert_eq!(ranks_from_arg("д1, аск1, б1, с1, г1").unwrap().len(), 5);

        let err = ranks_from_arg("д1 аск1 б1 с1").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "Ошибка: необходимо передать ровно 5 званий в --ranks, получено 4."
        );
    }

    #[test]
    fn exclude_env_values() {
        assert!(default_include_radiant(None));
        assert!(!default_include_radiant(Some("1")));
        assert!(!default_include_radiant(Some(" TRUE ")));
        assert!(default_include_radiant(Some("false")));
        assert!(default_include_radiant(Some("maybe")));
    }
}
