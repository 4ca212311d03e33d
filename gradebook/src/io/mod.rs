//! I/O helpers for gradebook commands.

pub mod config;
pub mod state_store;
