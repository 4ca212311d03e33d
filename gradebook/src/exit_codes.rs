//! Stable exit codes for gradebook CLI commands.

/// Command applied, query reported, or state cleared.
pub const OK: i32 = 0;
/// State file could not be read or written.
pub const FAILURE: i32 = 1;
/// Missing argument, failed precondition, or unrecognized command.
pub const REJECTED: i32 = 2;
