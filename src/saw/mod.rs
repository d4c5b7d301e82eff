//! Simple Additive Weighting: scoring and ranking of alternatives.
//!
//! Normalizes raw criteria values column-wise according to each criterion's
//! polarity, combines them with a weight vector (typically AHP-derived),
//! and ranks alternatives by descending score.
//!
//! # Key Types
//!
//! - [`Alternative`]: a candidate destination with raw per-criterion values
//! - [`RankedAlternative`]: an alternative with normalized values, score, and rank
//! - [`rank_alternatives`]: the scoring and ranking computation
//!
//! # References
//!
//! - Fishburn (1967), *Additive Utilities with Incomplete Product Sets*
//! - Hwang & Yoon (1981), *Multiple Attribute Decision Making*

mod engine;
mod types;

pub use engine::rank_alternatives;
pub use types::{Alternative, RankedAlternative};
