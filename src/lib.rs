//! Multi-criteria decision support for ranking beach destinations.
//!
//! Implements the two-stage method used by the tourism assessment workflow:
//!
//! - **AHP (Analytic Hierarchy Process)**: derives criteria weights from a
//!   pairwise comparison matrix and checks the judgements for internal
//!   consistency via the consistency ratio.
//! - **SAW (Simple Additive Weighting)**: normalizes raw criteria values by
//!   polarity (benefit/cost), combines them with the weights, and ranks the
//!   candidate destinations.
//!
//! The crate is a pure computation layer: no I/O, no storage, no shared
//! state. Every operation takes borrowed input and returns fresh output, so
//! concurrent calls never interfere. Persistence, HTTP, and rendering belong
//! to the calling layer.
//!
//! # Pipeline
//!
//! [`decision::evaluate`] wires the stages together: build the comparison
//! matrix from tagged input ([`pairwise`]), derive priorities ([`ahp`]),
//! gate on the consistency verdict, rank ([`saw`]), and project a
//! display-ready report ([`report`]). Each stage is also usable on its own;
//! [`assessment`] covers the upstream step of scoring raw field
//! observations into criteria values.
//!
//! # Features
//!
//! - `serde`: Serialize/Deserialize on all boundary types
//! - `parallel`: rayon-parallel scoring across alternatives

pub mod ahp;
pub mod assessment;
pub mod criteria;
pub mod decision;
pub mod error;
pub mod pairwise;
pub mod report;
pub mod saw;
