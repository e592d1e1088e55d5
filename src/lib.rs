//! Math Miner - idle mining and combat game core.
//!
//! Dig through a procedurally generated mine by solving arithmetic problems,
//! fund equipment upgrades with the loot, and let the hero fight an endless
//! monster roster in the background. Everything here is headless: a front end
//! drives [`core::GameEngine`] and renders its [`core::TickEvent`]s.

pub mod character;
pub mod combat;
pub mod core;
pub mod equipment;
pub mod error;
pub mod loot;
pub mod mine;
pub mod monsters;
pub mod problems;
pub mod resources;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod save;
pub mod simulator;

pub use crate::core::{GameEngine, GameState, Settings, TickEvent};
pub use resources::{ResourceKind, Resources};
