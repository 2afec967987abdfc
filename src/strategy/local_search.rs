//! Hill climbing with random restarts.
//!
//! # Algorithm
//!
//! For each restart:
//!
//! 1. Build a uniformly random order by inserting items one by one at a
//!    random position.
//! 2. Sweep every position pair `(i, j)`, `i < j`, of the order as it stood
//!    when the sweep began. A swap whose cyclic total beats the best value
//!    seen so far in this restart becomes the new candidate.
//! 3. After the sweep, continue from the candidate. A sweep with no
//!    improving swap ends the restart.
//!
//! The best order over all restarts is returned; on equal totals the
//! earliest restart wins.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::LocalSearchConfig;
use super::types::{OrderResult, OrderingStrategy, StrategyId};
use crate::affinity::AffinityMatrix;
use crate::error::{Result, ShelfError};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Randomized local search ordering.
#[derive(Debug, Clone, Default)]
pub struct LocalSearch {
    config: LocalSearchConfig,
}

/// Outcome of one restart.
struct Climb {
    order: Vec<usize>,
    total: u64,
    evaluations: usize,
}

impl LocalSearch {
    /// Fails with [`ShelfError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: LocalSearchConfig) -> Result<Self> {
        config.validate().map_err(ShelfError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    fn run_restarts(&self, matrix: &AffinityMatrix, seeds: &[u64]) -> Vec<Climb> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return seeds.par_iter().map(|&s| climb(matrix, s)).collect();
        }
        seeds.iter().map(|&s| climb(matrix, s)).collect()
    }
}

impl OrderingStrategy for LocalSearch {
    fn id(&self) -> StrategyId {
        StrategyId::LocalSearch
    }

    fn order_indices(&self, matrix: &AffinityMatrix) -> OrderResult {
        let n = matrix.len();
        let restarts = self.config.restarts_for(n);
        debug!(
            event = "order_start",
            strategy = "local-search",
            items = n,
            restarts,
        );

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        // Per-restart seeds keep seeded runs identical with or without rayon.
        let seeds: Vec<u64> = (0..restarts).map(|_| rng.random()).collect();
        let climbs = self.run_restarts(matrix, &seeds);

        let mut evaluations = 0;
        let mut best: Option<(usize, Climb)> = None;
        for (restart, climb) in climbs.into_iter().enumerate() {
            evaluations += climb.evaluations;
            trace!(event = "restart_end", restart, total = climb.total);
            if best.as_ref().is_none_or(|(_, b)| climb.total > b.total) {
                best = Some((restart, climb));
            }
        }

        let (best_restart, order, total) = match best {
            Some((restart, climb)) => (restart, climb.order, climb.total),
            // Zero restarts: fall back to input order.
            None => {
                let order: Vec<usize> = (0..n).collect();
                let total = matrix.cyclic_total(&order);
                (0, order, total)
            }
        };
        debug!(
            event = "order_end",
            strategy = "local-search",
            total,
            best_restart,
            evaluations,
        );
        OrderResult {
            order,
            total,
            evaluations,
            restarts,
            best_restart,
        }
    }
}

/// Uniformly random permutation built by repeated random insertion.
fn random_insertion_order<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order = Vec::with_capacity(n);
    for item in 0..n {
        let pos = rng.random_range(0..=order.len());
        order.insert(pos, item);
    }
    order
}

/// One restart: random start, then swap sweeps until no swap improves.
fn climb(matrix: &AffinityMatrix, seed: u64) -> Climb {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = matrix.len();

    let mut current = random_insertion_order(n, &mut rng);
    let mut total = matrix.cyclic_total(&current);
    let mut evaluations = 1;

    loop {
        let mut sweep = current.clone();
        let mut improved = false;
        for i in 0..n {
            for j in (i + 1)..n {
                sweep.swap(i, j);
                let candidate = matrix.cyclic_total(&sweep);
                evaluations += 1;
                if candidate > total {
                    total = candidate;
                    current.copy_from_slice(&sweep);
                    improved = true;
                }
                sweep.swap(i, j);
            }
        }
        if !improved {
            break;
        }
    }

    Climb {
        order: current,
        total,
        evaluations,
    }
}
