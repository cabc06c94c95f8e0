//! Shared averaging pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! parse 5 tokens -> scale positions -> mean -> round half-up -> label
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use serde::Serialize;

use crate::domain::{DEFAULT_INCLUDE_RADIANT, Rank, TEAM_SIZE};
use crate::error::RankError;
use crate::rank::{Scale, parse_rank, round_half_up};

/// All computed outputs of a single averaging run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageDetails {
    /// Russian labels of the parsed inputs, in input order.
    pub labels: Vec<String>,
    /// Scale positions of the inputs, in input order.
    pub values: Vec<u32>,
    pub average: f64,
    pub final_label: String,
    pub final_rank: Rank,
    pub include_radiant: bool,
}

/// Average exactly five rank tokens.
///
/// The first token that fails to parse aborts the whole computation.
pub fn compute_average_details<S: AsRef<str>>(
    ranks: &[S],
    include_radiant: bool,
) -> Result<AverageDetails, RankError> {
    if ranks.len() != TEAM_SIZE {
        return Err(RankError::wrong_count(ranks.len()));
    }

    let scale = Scale::new(include_radiant);
    let parsed = ranks
        .iter()
        .map(|raw| parse_rank(raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let labels = parsed.iter().map(|p| p.rank.label()).collect();
    let values: Vec<u32> = parsed.iter().map(|p| scale.position(p.rank)).collect();

    let average = f64::from(values.iter().sum::<u32>()) / TEAM_SIZE as f64;
    let final_rank = scale.rank_at(round_half_up(average));

    Ok(AverageDetails {
        labels,
        values,
        average,
        final_label: final_rank.label(),
        final_rank,
        include_radiant,
    })
}

/// Average five ranks with Radiant on the scale and return only the final label.
pub fn average_rank<S: AsRef<str>>(ranks: &[S]) -> Result<String, RankError> {
    compute_average_details(ranks, DEFAULT_INCLUDE_RADIANT).map(|d| d.final_label)
}
