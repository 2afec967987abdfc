//! Stock grocery categories and their compatibility table.

/// Reference Type categories, in `type_id` order.
pub const REFERENCE_TYPES: [&str; 11] = [
    "Carne",
    "Pescado",
    "Fruta",
    "Verdura&Hortaliza",
    "Cereal",
    "Lácteo",
    "Alcohol",
    "Legumbre",
    "Condimento",
    "Dulce",
    "Bebida",
];

/// Reference Context tags.
pub const REFERENCE_CONTEXTS: [&str; 3] = ["Desayuno+Merienda", "Aperitivo", "Fresco"];

/// Reference compatibility table, symmetric, 100 on the diagonal.
#[rustfmt::skip]
pub const REFERENCE_TABLE: [[i32; 11]; 11] = [
    [100,  20,   5,  85,  80,   0,  50,  65,  95,   0,   5],
    [ 20, 100,   5,  70,  20,   0,  25,  10,  95,   0,   5],
    [  5,   5, 100,  90,  75,  85,  20,  60,   5,  85,  25],
    [ 85,  70,  90, 100,  75,  50,   5,  90,  80,   0,   5],
    [ 80,  20,  75,  75, 100,  75,  50,  75,  50,  60,   5],
    [  0,   0,  85,  50,  75, 100,  20,   5,  20,  90,   5],
    [ 50,  25,  20,   5,  50,  20, 100,   5,  10,  20,  95],
    [ 65,  10,  60,  90,  75,   5,   5, 100,  90,  10,   5],
    [ 95,  95,   5,  80,  50,  20,  10,  90, 100,  25,   5],
    [  0,   0,  85,   0,  60,  90,  20,  10,  25, 100,   5],
    [  5,   5,  25,   5,   5,   5,  95,   5,   5,   5, 100],
];
