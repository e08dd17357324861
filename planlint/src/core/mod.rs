//! Deterministic, pure lint logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod fuzzy;
pub mod lint;
pub mod model;
pub mod patch;
pub mod result;
pub mod rules;
pub mod sarif;
pub mod types;
