//! Rank token handling.
//!
//! Parsing is split into small, pure steps so that the aggregation pipeline
//! stays trivial:
//! - clean a raw token (`normalize`)
//! - look the cleaned token up among the known spellings (`alias`, `parse`)
//! - place the structured rank on the numeric scale and back (`scale`)

pub mod alias;
pub mod normalize;
pub mod parse;
pub mod scale;

pub use alias::lookup_family;
pub use normalize::normalize_token;
pub use parse::{ParsedRank, parse_rank};
pub use scale::{Scale, round_half_up};
