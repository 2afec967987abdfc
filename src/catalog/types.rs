//! Catalog of attributes and the table they index.

use std::collections::HashSet;
use std::sync::Arc;

use super::reference::{REFERENCE_CONTEXTS, REFERENCE_TABLE, REFERENCE_TYPES};
use crate::affinity::AffinityScorer;
use crate::error::{Result, ShelfError};
use crate::model::{Attribute, ContextAttribute, Item, TypeAttribute};
use crate::table::CompatibilityTable;

/// The attributes available for building items, plus the shared
/// compatibility table.
///
/// Attribute names are unique across both kinds.
///
/// # Examples
///
/// ```
/// use u_shelf::catalog::Catalog;
///
/// let catalog = Catalog::reference();
/// let salmon = catalog.item("Salmon", &["Pescado", "Fresco"]).unwrap();
/// let lemon = catalog.item("Lemon", &["Fruta", "Condimento", "Fresco"]).unwrap();
///
/// // mean(5, 95) = 50, plus 20 for the shared "Fresco"
/// assert_eq!(catalog.scorer().score(&salmon, &lemon).unwrap(), 70);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    types: Vec<TypeAttribute>,
    contexts: Vec<ContextAttribute>,
    table: Arc<CompatibilityTable>,
}

impl Catalog {
    /// Builds a catalog, checking that attribute names are unique and
    /// every Type id indexes into `table`.
    pub fn new(
        types: Vec<TypeAttribute>,
        contexts: Vec<ContextAttribute>,
        table: Arc<CompatibilityTable>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        let names = types
            .iter()
            .map(|t| t.name.as_str())
            .chain(contexts.iter().map(|c| c.name.as_str()));
        for name in names {
            if !seen.insert(name) {
                return Err(ShelfError::InvalidConfig(format!(
                    "attribute '{name}' declared twice"
                )));
            }
        }
        for t in &types {
            if t.type_id >= table.size() {
                return Err(ShelfError::TypeIdOutOfRange {
                    type_id: t.type_id,
                    size: table.size(),
                });
            }
        }
        Ok(Self {
            types,
            contexts,
            table,
        })
    }

    /// The stock grocery catalog: 11 Type categories, 3 Context tags.
    pub fn reference() -> Self {
        Self {
            types: REFERENCE_TYPES
                .iter()
                .enumerate()
                .map(|(id, &name)| TypeAttribute::new(name, id))
                .collect(),
            contexts: REFERENCE_CONTEXTS
                .iter()
                .map(|&name| ContextAttribute::new(name))
                .collect(),
            table: Arc::new(CompatibilityTable::from_array(&REFERENCE_TABLE)),
        }
    }

    pub fn types(&self) -> &[TypeAttribute] {
        &self.types
    }

    pub fn contexts(&self) -> &[ContextAttribute] {
        &self.contexts
    }

    /// Shared handle to the compatibility table.
    pub fn table(&self) -> Arc<CompatibilityTable> {
        Arc::clone(&self.table)
    }

    /// A scorer reading this catalog's table.
    pub fn scorer(&self) -> AffinityScorer {
        AffinityScorer::new(self.table())
    }

    /// Looks up an attribute of either kind by name.
    pub fn attribute(&self, name: &str) -> Result<Attribute> {
        if let Some(t) = self.types.iter().find(|t| t.name == name) {
            return Ok(Attribute::Type(t.clone()));
        }
        self.contexts
            .iter()
            .find(|c| c.name == name)
            .map(|c| Attribute::Context(c.clone()))
            .ok_or_else(|| ShelfError::UnknownAttribute(name.to_string()))
    }

    /// Builds a validated item from attribute names.
    pub fn item(&self, name: &str, attributes: &[&str]) -> Result<Item> {
        let attributes = attributes
            .iter()
            .map(|a| self.attribute(a))
            .collect::<Result<Vec<_>>>()?;
        Item::new(name, attributes)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}
