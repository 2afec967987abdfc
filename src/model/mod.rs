//! Item and attribute value types.
//!
//! An [`Item`] carries two disjoint kinds of categorical attributes:
//!
//! - [`TypeAttribute`]: a named category with a dense `type_id` indexing
//!   the compatibility table.
//! - [`ContextAttribute`]: a named tag matched only by name equality.
//!
//! Items are immutable for the duration of a scoring or ordering call.

mod attribute;
mod item;

pub use attribute::{Attribute, ContextAttribute, TypeAttribute};
pub use item::{Item, MAX_ATTRIBUTES};
