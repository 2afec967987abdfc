//! Circular shelf arrangement by attribute affinity.
//!
//! Arranges a set of items, each tagged with categorical attributes, into
//! a loop that maximizes the summed affinity of neighboring items,
//! wrapping from the last item back to the first. This is a
//! maximum-weight Hamiltonian cycle over the complete graph of pairwise
//! affinities.
//!
//! - **Model**: items with Type attributes (indexing a compatibility
//!   table) and Context attributes (matched by name).
//! - **Table**: the square Type-compatibility table, shared read-only.
//! - **Affinity**: truncated mean Type compatibility plus a bonus per
//!   matching Context pair.
//! - **Catalog**: the reference grocery categories and their table.
//! - **Strategy**: exact backtracking, hill climbing with restarts, and
//!   greedy nearest-neighbor orderings.
//! - **Arrangement**: an ordered working set with its cached total,
//!   supporting repositioning by name.
//!
//! # Example
//!
//! ```
//! use u_shelf::arrangement::Arrangement;
//! use u_shelf::catalog::Catalog;
//!
//! let catalog = Catalog::reference();
//! let items = ["Beef:Carne", "Salmon:Pescado", "Lemon:Fruta", "Pepper:Condimento"]
//!     .iter()
//!     .map(|spec| {
//!         let (name, kind) = spec.split_once(':').unwrap();
//!         catalog.item(name, &[kind]).unwrap()
//!     })
//!     .collect();
//!
//! let mut shelf = Arrangement::new("aisle-3", items, catalog.scorer()).unwrap();
//! shelf.order(3).unwrap(); // greedy
//! let greedy = shelf.total_affinity();
//! shelf.order(1).unwrap(); // exact
//! assert!(shelf.total_affinity() >= greedy);
//! ```

pub mod affinity;
pub mod arrangement;
pub mod catalog;
pub mod error;
pub mod model;
pub mod strategy;
pub mod table;

pub use error::{Result, ShelfError};
