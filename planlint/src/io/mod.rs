//! I/O helpers for planlint commands.

pub mod config;
pub mod plan_store;
pub mod registry_store;
