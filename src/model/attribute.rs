//! Attribute kinds.

/// A category attribute indexing the compatibility table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeAttribute {
    /// Unique attribute name.
    pub name: String,
    /// Dense index `0..K` into the compatibility table.
    pub type_id: usize,
}

impl TypeAttribute {
    pub fn new(name: impl Into<String>, type_id: usize) -> Self {
        Self {
            name: name.into(),
            type_id,
        }
    }
}

/// A tag attribute matched by name equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextAttribute {
    /// Unique attribute name.
    pub name: String,
}

impl ContextAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Either kind of attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Type(TypeAttribute),
    Context(ContextAttribute),
}

impl Attribute {
    /// Returns the attribute name regardless of kind.
    pub fn name(&self) -> &str {
        match self {
            Attribute::Type(t) => &t.name,
            Attribute::Context(c) => &c.name,
        }
    }
}

impl From<TypeAttribute> for Attribute {
    fn from(t: TypeAttribute) -> Self {
        Attribute::Type(t)
    }
}

impl From<ContextAttribute> for Attribute {
    fn from(c: ContextAttribute) -> Self {
        Attribute::Context(c)
    }
}
