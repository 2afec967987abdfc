//! Nearest-neighbor construction.

use tracing::debug;

use super::types::{OrderResult, OrderingStrategy, StrategyId};
use crate::affinity::AffinityMatrix;

/// Greedy (nearest-neighbor) ordering.
///
/// Starts at the first item and repeatedly appends the unvisited item with
/// the highest affinity to the last one placed. Ties go to the earliest
/// item in input order. The closing pair (last, first) plays no part in
/// any choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedySearch;

impl OrderingStrategy for GreedySearch {
    fn id(&self) -> StrategyId {
        StrategyId::Greedy
    }

    fn order_indices(&self, matrix: &AffinityMatrix) -> OrderResult {
        let n = matrix.len();
        debug!(event = "order_start", strategy = "greedy", items = n);

        let mut remaining: Vec<usize> = (0..n).collect();
        let mut order = Vec::with_capacity(n);
        let mut evaluations = 0;
        let mut current = 0;

        while !remaining.is_empty() {
            let mut next: Option<(usize, u64)> = None;
            for &candidate in &remaining {
                if candidate == current {
                    continue;
                }
                let score = matrix.score(current, candidate);
                evaluations += 1;
                if next.is_none_or(|(_, best)| score > best) {
                    next = Some((candidate, score));
                }
            }

            order.push(current);
            remaining.retain(|&i| i != current);
            match next {
                Some((candidate, _)) => current = candidate,
                None => break,
            }
        }

        let total = matrix.cyclic_total(&order);
        debug!(event = "order_end", strategy = "greedy", total, evaluations);
        OrderResult {
            order,
            total,
            evaluations,
            restarts: 1,
            best_restart: 0,
        }
    }
}
