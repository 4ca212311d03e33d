//! Command-line gradebook.
//!
//! Tracks students, classrooms, enrollment, and per-classroom scores in a
//! single JSON document. Every invocation is one load → handle → commit cycle.
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (argument checks, state
//!   transitions, averages). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (state file, configuration).
//!   [`io::state_store::StateStore`] is the seam tests replace.
//!
//! Orchestration modules ([`handlers`], [`dispatch`], [`report`]) couple core
//! logic with I/O to implement CLI commands.

pub mod core;
pub mod dispatch;
pub mod error;
pub mod exit_codes;
pub mod gradebook;
pub mod handlers;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
