//! Analytic Hierarchy Process: criteria weighting with consistency checking.
//!
//! Derives a priority (weight) vector from a pairwise comparison matrix and
//! measures how self-contradictory the comparisons are via the consistency
//! ratio. Inconsistency is a reported condition, not an error — weights stay
//! available so callers can show them next to a warning.
//!
//! # Key Types
//!
//! - [`AhpResult`]: weights plus every intermediate consistency figure
//! - [`derive_priorities`]: the weighting computation
//! - [`CONSISTENCY_THRESHOLD`], [`RANDOM_CONSISTENCY_INDEX`]: Saaty's
//!   acceptance constants
//!
//! # References
//!
//! - Saaty (1980), *The Analytic Hierarchy Process*
//! - Saaty (1987), *The Analytic Hierarchy Process — What It Is and How It Is Used*

mod engine;
mod types;

pub use engine::{derive_priorities, CONSISTENCY_THRESHOLD, RANDOM_CONSISTENCY_INDEX};
pub use types::AhpResult;
