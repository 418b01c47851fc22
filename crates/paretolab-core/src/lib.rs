//! paretolab-core — Pareto scoring and ranking comparison.
//!
//! This crate holds the scenario catalog, the per-session state, the Pareto
//! scorer and comparator, and the handlers a presentation host drives.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod pareto;
pub mod priority;
pub mod session;
pub mod view;

pub use catalog::Catalog;
pub use compare::{compare, Comparison, Verdict};
pub use error::ParetoError;
pub use pareto::{score, top_contributors, ParetoRanking, RankedEntry, SortPolicy};
pub use session::SessionState;
