//! Headless balance simulator.
//!
//! Plays many seeded sessions with a simple bot to analyze:
//! - How deep the mine gets dug in a given time
//! - How far through the monster roster the hero fights
//! - How resources flow into equipment
//!
//! Runs drive `GameEngine` through virtual time, so the numbers match real
//! sessions exactly.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
