//! `rank-avg` library crate.
//!
//! Averages the competitive ranks of a five-player VALORANT team. Ranks are
//! accepted as loose text in Russian or English ("Алмаз 1", "д-1", "diamond1")
//! and the result is reported as a Russian label ("Золото 2", "Радиант").
//!
//! The binary (`rank-avg`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the CLI and the TUI share one pipeline

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod rank;
pub mod report;
pub mod tui;

pub use app::pipeline::{AverageDetails, average_rank, compute_average_details};
pub use domain::{Family, Rank};
pub use error::{AppError, RankError};
pub use rank::{ParsedRank, Scale, normalize_token, parse_rank};
