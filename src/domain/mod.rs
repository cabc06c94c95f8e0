//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the rank families and structured ranks (`Family`, `Rank`)
//! - scale constants (`TEAM_SIZE`, `RADIANT_VALUE`, `MAX_WITHOUT_RADIANT`)

pub mod types;

pub use types::*;
