//! Save/load of sessions.

pub mod data;
pub mod manager;

pub use manager::SaveManager;
