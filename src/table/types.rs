//! Compatibility table storage and lookup.

use crate::error::{Result, ShelfError};
use crate::model::Item;

/// Square compatibility table, stored row-major.
///
/// Symmetry is not required: `score(a, b)` reads row `a`, column `b`.
///
/// # Examples
///
/// ```
/// use u_shelf::table::CompatibilityTable;
///
/// let table = CompatibilityTable::new(vec![vec![100, 20], vec![20, 100]]).unwrap();
/// assert_eq!(table.size(), 2);
/// assert_eq!(table.score(0, 1).unwrap(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompatibilityTable {
    size: usize,
    values: Vec<i32>,
}

impl CompatibilityTable {
    /// Builds a table from its rows.
    ///
    /// Fails with [`ShelfError::InvalidTable`] when `rows` is empty or any
    /// row length differs from the row count.
    pub fn new(rows: Vec<Vec<i32>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(ShelfError::InvalidTable("table has no rows".into()));
        }
        let mut values = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ShelfError::InvalidTable(format!(
                    "row {i} has {} columns, expected {size}",
                    row.len()
                )));
            }
            values.extend(row);
        }
        Ok(Self { size, values })
    }

    /// Builds a table from a fixed-size row-major array.
    pub(crate) fn from_array<const K: usize>(rows: &[[i32; K]; K]) -> Self {
        Self {
            size: K,
            values: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of Type categories (rows = columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compatibility of Type `a` with Type `b`.
    pub fn score(&self, a: usize, b: usize) -> Result<i32> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.values[a * self.size + b])
    }

    /// Whether `score(a, b) == score(b, a)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|a| {
            (a + 1..self.size).all(|b| self.values[a * self.size + b] == self.values[b * self.size + a])
        })
    }

    /// Checks that every Type attribute of `item` indexes into this table.
    pub fn validate_item(&self, item: &Item) -> Result<()> {
        item.types().iter().try_for_each(|t| self.check(t.type_id))
    }

    fn check(&self, type_id: usize) -> Result<()> {
        if type_id < self.size {
            Ok(())
        } else {
            Err(ShelfError::TypeIdOutOfRange {
                type_id,
                size: self.size,
            })
        }
    }
}
