//! Cached pairwise affinities of a working set.

use super::scorer::AffinityScorer;
use crate::error::Result;
use crate::model::Item;

/// Every ordered pairwise affinity of a fixed item list, indexed by
/// position in that list.
///
/// Built once per ordering call; the strategies then evaluate cycles
/// over item indices without rescoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinityMatrix {
    n: usize,
    scores: Vec<u64>,
}

impl AffinityMatrix {
    /// Scores every ordered pair `(items[i], items[j])`, including `i == j`.
    pub fn build(scorer: &AffinityScorer, items: &[Item]) -> Result<Self> {
        let n = items.len();
        let mut scores = Vec::with_capacity(n * n);
        for a in items {
            for b in items {
                scores.push(scorer.score(a, b)?);
            }
        }
        Ok(Self { n, scores })
    }

    /// Builds a matrix from precomputed row-major scores.
    ///
    /// # Panics
    ///
    /// Panics if `scores.len() != n * n`.
    pub fn from_scores(n: usize, scores: Vec<u64>) -> Self {
        assert_eq!(scores.len(), n * n, "expected {n}x{n} scores");
        Self { n, scores }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Affinity of item `i` with item `j`.
    #[inline]
    pub fn score(&self, i: usize, j: usize) -> u64 {
        self.scores[i * self.n + j]
    }

    /// Cyclic total affinity of `order` (indices into the item list).
    /// Zero for fewer than two entries.
    pub fn cyclic_total(&self, order: &[usize]) -> u64 {
        if order.len() < 2 {
            return 0;
        }
        let wrap = self.score(order[order.len() - 1], order[0]);
        order
            .windows(2)
            .map(|w| self.score(w[0], w[1]))
            .sum::<u64>()
            + wrap
    }
}
