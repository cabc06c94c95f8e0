//! Raw token → structured rank.

use serde::Serialize;

use crate::domain::{Family, Rank};
use crate::error::RankError;
use crate::rank::{lookup_family, normalize_token};

/// A successfully parsed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedRank {
    pub rank: Rank,
    /// Russian family name without the sub-tier.
    pub base_name: &'static str,
}

/// Parse one user-supplied rank token.
///
/// A trailing `1`, `2` or `3` is split off as the sub-tier and the remainder must
/// match an alias exactly. Radiant ignores any sub-tier; every other family
/// requires one.
pub fn parse_rank(raw: &str) -> Result<ParsedRank, RankError> {
    let token = normalize_token(raw);
    let (core, tier) = split_tier(&token);

    let family = lookup_family(core).ok_or_else(|| RankError::UnrecognizedRank {
        raw: raw.to_string(),
    })?;

    let rank = if family.is_top() {
        Rank::radiant()
    } else {
        let tier = tier.ok_or(RankError::MissingSubTier { family })?;
        ordinary_rank(family, tier)?
    };

    Ok(ParsedRank {
        rank,
        base_name: family.display_name(),
    })
}

/// Split a trailing sub-tier digit (1..=3 only) off a normalized token.
fn split_tier(token: &str) -> (&str, Option<u32>) {
    match token.chars().last() {
        Some(c @ '1'..='3') => {
            let core = &token[..token.len() - c.len_utf8()];
            (core, c.to_digit(10))
        }
        _ => (token, None),
    }
}

fn ordinary_rank(family: Family, tier: u32) -> Result<Rank, RankError> {
    u8::try_from(tier)
        .ok()
        .and_then(|t| Rank::tiered(family, t))
        .ok_or(RankError::InvalidSubTier { family, tier })
}
