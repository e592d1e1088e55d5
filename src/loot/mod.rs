//! Loot tables.

pub mod drops;

pub use drops::*;
