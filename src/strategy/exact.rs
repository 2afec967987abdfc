//! Exhaustive permutation search.
//!
//! Builds every permutation by backtracking with a `used` marker per item,
//! in lexicographic index order, and keeps the first permutation reaching
//! the highest cyclic total. Later permutations with an equal total do not
//! replace it.

use tracing::{debug, warn};

use super::types::{OrderResult, OrderingStrategy, StrategyId};
use crate::affinity::AffinityMatrix;

/// Above this size exhaustive search gets logged as expensive.
const LARGE_PROBLEM: usize = 10;

/// Exact (brute force) ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactSearch;

struct Backtrack<'a> {
    matrix: &'a AffinityMatrix,
    used: Vec<bool>,
    current: Vec<usize>,
    best: Option<(Vec<usize>, u64)>,
    evaluations: usize,
}

impl Backtrack<'_> {
    fn extend(&mut self) {
        let n = self.matrix.len();
        if self.current.len() == n {
            let total = self.matrix.cyclic_total(&self.current);
            self.evaluations += 1;
            if self.best.as_ref().is_none_or(|(_, best)| total > *best) {
                self.best = Some((self.current.clone(), total));
            }
            return;
        }
        for i in 0..n {
            if self.used[i] {
                continue;
            }
            self.used[i] = true;
            self.current.push(i);
            self.extend();
            self.current.pop();
            self.used[i] = false;
        }
    }
}

impl OrderingStrategy for ExactSearch {
    fn id(&self) -> StrategyId {
        StrategyId::Exact
    }

    fn order_indices(&self, matrix: &AffinityMatrix) -> OrderResult {
        let n = matrix.len();
        if n > LARGE_PROBLEM {
            warn!(
                event = "exact_large_input",
                items = n,
                "exhaustive search over {n}! permutations"
            );
        }
        debug!(event = "order_start", strategy = "exact", items = n);

        let mut search = Backtrack {
            matrix,
            used: vec![false; n],
            current: Vec::with_capacity(n),
            best: None,
            evaluations: 0,
        };
        search.extend();

        let (order, total) = search.best.unwrap_or_default();
        debug!(
            event = "order_end",
            strategy = "exact",
            total,
            evaluations = search.evaluations,
        );
        OrderResult {
            order,
            total,
            evaluations: search.evaluations,
            restarts: 1,
            best_restart: 0,
        }
    }
}
