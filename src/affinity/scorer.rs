//! Affinity between two items.

use std::sync::Arc;

use crate::error::{Result, ShelfError};
use crate::model::Item;
use crate::table::CompatibilityTable;

/// Bonus added for each matching pair of Context attribute names.
pub const CONTEXT_MATCH_BONUS: i64 = 20;

/// Scores item pairs against a shared compatibility table.
///
/// Cloning is cheap; clones share the same table.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_shelf::affinity::AffinityScorer;
/// use u_shelf::model::{ContextAttribute, Item, TypeAttribute};
/// use u_shelf::table::CompatibilityTable;
///
/// let table = Arc::new(CompatibilityTable::new(vec![vec![100]]).unwrap());
/// let scorer = AffinityScorer::new(table);
///
/// let fresh = || vec![ContextAttribute::new("Fresco")];
/// let a = Item::from_parts("A", vec![TypeAttribute::new("Carne", 0)], fresh()).unwrap();
/// let b = Item::from_parts("B", vec![TypeAttribute::new("Carne", 0)], fresh()).unwrap();
/// assert_eq!(scorer.score(&a, &b).unwrap(), 120);
/// ```
#[derive(Debug, Clone)]
pub struct AffinityScorer {
    table: Arc<CompatibilityTable>,
}

impl AffinityScorer {
    pub fn new(table: Arc<CompatibilityTable>) -> Self {
        Self { table }
    }

    /// The table this scorer reads.
    pub fn table(&self) -> &CompatibilityTable {
        &self.table
    }

    /// Affinity of `a` with `b`. Calling it with `a == b` is allowed.
    ///
    /// Fails with [`ShelfError::TypeIdOutOfRange`] on an id the table does
    /// not cover, and with [`ShelfError::InvalidScore`] if the result is
    /// negative.
    pub fn score(&self, a: &Item, b: &Item) -> Result<u64> {
        let mut sum = 0i64;
        for t in a.types() {
            for u in b.types() {
                sum += i64::from(self.table.score(t.type_id, u.type_id)?);
            }
        }
        let pairs = (a.types().len() * b.types().len()) as i64;
        if pairs == 0 {
            return Err(ShelfError::InvalidItem(format!(
                "cannot score '{}' with '{}' without type attributes",
                a.name(),
                b.name()
            )));
        }
        // Integer division truncates toward zero.
        let mut value = sum / pairs;

        for c in a.contexts() {
            for d in b.contexts() {
                if c.name == d.name {
                    value += CONTEXT_MATCH_BONUS;
                }
            }
        }

        u64::try_from(value).map_err(|_| ShelfError::InvalidScore {
            a: a.name().to_string(),
            b: b.name().to_string(),
            value,
        })
    }

    /// Cyclic total affinity of a sequence: every adjacent pair plus the
    /// wrap pair (last, first). Zero for fewer than two items.
    pub fn cyclic_total<'a, I>(&self, sequence: I) -> Result<u64>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let items: Vec<&Item> = sequence.into_iter().collect();
        if items.len() < 2 {
            return Ok(0);
        }
        let mut total = 0;
        for (i, item) in items.iter().enumerate() {
            let next = items[(i + 1) % items.len()];
            total += self.score(item, next)?;
        }
        Ok(total)
    }
}
