//! Item (product) definition and construction checks.

use super::attribute::{Attribute, ContextAttribute, TypeAttribute};
use crate::error::{Result, ShelfError};

/// Maximum number of attributes an item may declare through [`Item::new`].
pub const MAX_ATTRIBUTES: usize = 4;

/// A shelf item: a name plus its Type and Context attributes.
///
/// Every item holds at least one Type attribute, so the Type-compatibility
/// mean in affinity scoring is always defined.
///
/// # Examples
///
/// ```
/// use u_shelf::model::{Attribute, ContextAttribute, Item, TypeAttribute};
///
/// let apple = Item::new(
///     "Apple",
///     vec![
///         Attribute::from(TypeAttribute::new("Fruta", 2)),
///         Attribute::from(ContextAttribute::new("Fresco")),
///     ],
/// )
/// .unwrap();
/// assert_eq!(apple.types().len(), 1);
/// assert_eq!(apple.contexts().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    types: Vec<TypeAttribute>,
    contexts: Vec<ContextAttribute>,
}

impl Item {
    /// Builds an item from a mixed attribute list.
    ///
    /// Attributes are split by kind, keeping their relative order.
    /// Fails with [`ShelfError::InvalidItem`] when the name is empty, the
    /// list holds zero or more than [`MAX_ATTRIBUTES`] attributes, or no
    /// attribute is a Type attribute.
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Result<Self> {
        let name = name.into();
        if attributes.is_empty() {
            return Err(ShelfError::InvalidItem(format!(
                "'{name}' must have at least one attribute"
            )));
        }
        if attributes.len() > MAX_ATTRIBUTES {
            return Err(ShelfError::InvalidItem(format!(
                "'{name}' has {} attributes, at most {MAX_ATTRIBUTES} allowed",
                attributes.len()
            )));
        }

        let mut types = Vec::new();
        let mut contexts = Vec::new();
        for attribute in attributes {
            match attribute {
                Attribute::Type(t) => types.push(t),
                Attribute::Context(c) => contexts.push(c),
            }
        }
        Self::from_parts(name, types, contexts)
    }

    /// Builds an item from pre-split attribute lists.
    ///
    /// No upper bound on the attribute count; the name must be non-empty and
    /// `types` must be non-empty.
    pub fn from_parts(
        name: impl Into<String>,
        types: Vec<TypeAttribute>,
        contexts: Vec<ContextAttribute>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ShelfError::InvalidItem("name must not be empty".into()));
        }
        if types.is_empty() {
            return Err(ShelfError::InvalidItem(format!(
                "'{name}' must have at least one type attribute"
            )));
        }
        Ok(Self {
            name,
            types,
            contexts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[TypeAttribute] {
        &self.types
    }

    pub fn contexts(&self) -> &[ContextAttribute] {
        &self.contexts
    }

    /// Changes the item name. Cached scores stay valid: they are keyed by
    /// position in a working set, not by name.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ShelfError::InvalidItem("name must not be empty".into()));
        }
        self.name = name;
        Ok(())
    }
}
