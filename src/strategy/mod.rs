//! Cyclic ordering strategies.
//!
//! Each strategy turns a working set into a circular sequence that aims
//! to maximize the cyclic total affinity (every adjacent pair plus the
//! wrap pair from last back to first). This is a maximum-weight
//! Hamiltonian cycle over the complete graph of pairwise affinities.
//!
//! - [`ExactSearch`]: backtracking over every permutation, O(n!·n).
//!   Optimal and deterministic; only practical for small sets.
//! - [`LocalSearch`]: hill climbing over pairwise swaps from random
//!   starting orders, with `3n` or `5n` restarts.
//! - [`GreedySearch`]: nearest-neighbor construction from the first
//!   item, O(n²) and deterministic.
//!
//! [`Strategy`] wraps the three behind one enum; [`StrategyId`] is the
//! numeric encoding (`1`, `2`, `3`) used at system boundaries.

mod config;
mod exact;
mod greedy;
mod local_search;
mod types;

pub use config::LocalSearchConfig;
pub use exact::ExactSearch;
pub use greedy::GreedySearch;
pub use local_search::LocalSearch;
pub use types::{OrderResult, OrderingStrategy, Strategy, StrategyId};
