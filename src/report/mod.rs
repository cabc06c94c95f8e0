//! Reporting utilities: text and JSON renderings of an averaging run.

pub mod format;

pub use format::*;
