//! Reference attribute catalog.
//!
//! Groups the Type and Context attributes known to a deployment together
//! with the compatibility table their Type ids index. [`Catalog::reference`]
//! provides the stock grocery categories:
//!
//! | id | Type              | id | Type       |
//! |----|-------------------|----|------------|
//! | 0  | Carne             | 6  | Alcohol    |
//! | 1  | Pescado           | 7  | Legumbre   |
//! | 2  | Fruta             | 8  | Condimento |
//! | 3  | Verdura&Hortaliza | 9  | Dulce      |
//! | 4  | Cereal            | 10 | Bebida     |
//! | 5  | Lácteo            |    |            |
//!
//! and the Context tags `Desayuno+Merienda`, `Aperitivo` and `Fresco`.

mod reference;
mod types;

pub use reference::{REFERENCE_CONTEXTS, REFERENCE_TABLE, REFERENCE_TYPES};
pub use types::Catalog;
