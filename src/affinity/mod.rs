//! Pairwise affinity scoring.
//!
//! The affinity of two items is the truncated mean of the Type
//! compatibilities over every Type pair, plus a fixed bonus for every
//! pair of equally named Context attributes:
//!
//! ```text
//! affinity(a, b) = Σ table[t][u] / (|Ta|·|Tb|)   for t ∈ Ta, u ∈ Tb
//!                + 20 · |{(c, c') ∈ Ca × Cb : c.name == c'.name}|
//! ```
//!
//! [`AffinityMatrix`] caches every pairwise score of a working set so the
//! ordering strategies can evaluate cycles by index.

mod matrix;
mod scorer;

pub use matrix::AffinityMatrix;
pub use scorer::{AffinityScorer, CONTEXT_MATCH_BONUS};
