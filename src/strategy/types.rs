//! Strategy contract, dispatch enum and boundary ids.

use std::fmt;

use super::config::LocalSearchConfig;
use super::exact::ExactSearch;
use super::greedy::GreedySearch;
use super::local_search::LocalSearch;
use crate::affinity::{AffinityMatrix, AffinityScorer};
use crate::error::{Result, ShelfError};
use crate::model::Item;

/// Result of one ordering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResult {
    /// Permutation of item indices, read as a cycle.
    pub order: Vec<usize>,

    /// Cyclic total affinity of `order`.
    pub total: u64,

    /// Cyclic totals evaluated (Exact, LocalSearch) or candidate pairs
    /// scored (Greedy).
    pub evaluations: usize,

    /// Restarts run. Always 1 for the deterministic strategies.
    pub restarts: usize,

    /// Restart (0-based) that produced `order`.
    pub best_restart: usize,
}

/// Produces a cyclic ordering of a working set.
///
/// Implementors work on item indices against a precomputed
/// [`AffinityMatrix`]; [`order`](Self::order) and [`run`](Self::run) handle
/// scoring and mapping back to items.
pub trait OrderingStrategy {
    /// Which strategy this is.
    fn id(&self) -> StrategyId;

    /// Orders the items of a non-empty matrix.
    ///
    /// Callers guarantee `!matrix.is_empty()`.
    fn order_indices(&self, matrix: &AffinityMatrix) -> OrderResult;

    /// Scores `items` and orders them.
    ///
    /// Fails with [`ShelfError::EmptyInput`] on an empty slice and
    /// propagates scoring errors.
    fn run(&self, scorer: &AffinityScorer, items: &[Item]) -> Result<OrderResult> {
        if items.is_empty() {
            return Err(ShelfError::EmptyInput);
        }
        let matrix = AffinityMatrix::build(scorer, items)?;
        Ok(self.order_indices(&matrix))
    }

    /// Returns `items` permuted into this strategy's cyclic order.
    fn order(&self, scorer: &AffinityScorer, items: &[Item]) -> Result<Vec<Item>> {
        let result = self.run(scorer, items)?;
        Ok(result.order.iter().map(|&i| items[i].clone()).collect())
    }
}

/// Numeric strategy code used at system boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyId {
    Exact = 1,
    LocalSearch = 2,
    Greedy = 3,
}

impl StrategyId {
    /// The boundary encoding.
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for StrategyId {
    type Error = ShelfError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            1 => Ok(StrategyId::Exact),
            2 => Ok(StrategyId::LocalSearch),
            3 => Ok(StrategyId::Greedy),
            other => Err(ShelfError::UnknownStrategy(other)),
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyId::Exact => "exact",
            StrategyId::LocalSearch => "local-search",
            StrategyId::Greedy => "greedy",
        };
        f.write_str(name)
    }
}

/// One of the three ordering strategies.
///
/// # Examples
///
/// ```
/// use u_shelf::catalog::Catalog;
/// use u_shelf::strategy::{OrderingStrategy, Strategy, StrategyId};
///
/// let catalog = Catalog::reference();
/// let items = vec![
///     catalog.item("Beef", &["Carne"]).unwrap(),
///     catalog.item("Milk", &["Lácteo"]).unwrap(),
///     catalog.item("Pepper", &["Condimento"]).unwrap(),
/// ];
///
/// let exact = Strategy::from_id(StrategyId::Exact);
/// let result = exact.run(&catalog.scorer(), &items).unwrap();
/// assert_eq!(result.order.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub enum Strategy {
    Exact(ExactSearch),
    LocalSearch(LocalSearch),
    Greedy(GreedySearch),
}

impl Strategy {
    /// Builds the strategy for `id`; local search uses the default config.
    pub fn from_id(id: StrategyId) -> Self {
        match id {
            StrategyId::Exact => Strategy::Exact(ExactSearch),
            StrategyId::LocalSearch => Strategy::LocalSearch(LocalSearch::default()),
            StrategyId::Greedy => Strategy::Greedy(GreedySearch),
        }
    }

    /// Builds the strategy for a raw boundary code.
    pub fn from_code(code: i64) -> Result<Self> {
        StrategyId::try_from(code).map(Self::from_id)
    }

    /// Local search with a custom configuration.
    pub fn local_search(config: LocalSearchConfig) -> Result<Self> {
        LocalSearch::new(config).map(Strategy::LocalSearch)
    }
}

impl OrderingStrategy for Strategy {
    fn id(&self) -> StrategyId {
        match self {
            Strategy::Exact(s) => s.id(),
            Strategy::LocalSearch(s) => s.id(),
            Strategy::Greedy(s) => s.id(),
        }
    }

    fn order_indices(&self, matrix: &AffinityMatrix) -> OrderResult {
        match self {
            Strategy::Exact(s) => s.order_indices(matrix),
            Strategy::LocalSearch(s) => s.order_indices(matrix),
            Strategy::Greedy(s) => s.order_indices(matrix),
        }
    }
}
