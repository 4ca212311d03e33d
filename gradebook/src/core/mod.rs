//! Deterministic, pure logic behind every gradebook command.
//!
//! Core modules must be free of I/O side effects. They operate on an
//! in-memory [`Gradebook`](crate::gradebook::Gradebook) and return new values
//! (or rejections) suitable for tests.

pub mod args;
pub mod invariants;
pub mod math;
pub mod ops;
pub mod scores;
