//! Error taxonomy for gradebook commands.
//!
//! [`Rejection`] covers everything a handler refuses to do; its `Display` text
//! is the diagnostic shown to the user. [`StoreError`] covers the state file.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::args::MissingArgument;

/// A command that was refused without touching the state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error(transparent)]
    MissingArgument(#[from] MissingArgument),

    #[error("Please enter a valid command.")]
    InvalidCommand,

    #[error("Student already exists.")]
    StudentExists,

    #[error("Student named {student} doesn't exist. Run: student create {student} to create.")]
    UnknownStudent { student: String },

    #[error(
        "{student} is not enrolled in {classroom}. Run: classroom add_student {classroom} {student} to enroll."
    )]
    NotEnrolled { student: String, classroom: String },

    #[error(
        "{student} does not have any grades for {classroom}. Run: student add_score {student} <score> {classroom} to record one."
    )]
    NoGrades { student: String, classroom: String },

    #[error("Classroom already exists.")]
    ClassroomExists,

    #[error(
        "Classroom {classroom} doesn't exist. Run: classroom create {classroom} <teacher> to create."
    )]
    UnknownClassroom { classroom: String },

    #[error("{student} is already enrolled in {classroom}.")]
    AlreadyEnrolled { student: String, classroom: String },

    #[error(
        "Classroom {classroom} does not have any students. Run: classroom add_student {classroom} <student> to enroll."
    )]
    NoStudents { classroom: String },
}

/// Failure of the persisted state file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unable to load gradebook {}: {}", .path.display(), .reason)]
    Unavailable { path: PathBuf, reason: String },

    #[error("Error writing file {}: {}", .path.display(), .reason)]
    WriteFailed { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_shows_its_own_message() {
        let rejection = Rejection::from(MissingArgument::new("Please provide a valid score."));
        assert_eq!(rejection.to_string(), "Please provide a valid score.");
    }

    #[test]
    fn not_enrolled_names_the_enroll_command() {
        let rejection = Rejection::NotEnrolled {
            student: "mary".to_string(),
            classroom: "math".to_string(),
        };
        assert!(
            rejection
                .to_string()
                .contains("Run: classroom add_student math mary")
        );
    }

    #[test]
    fn write_failure_is_distinguishable() {
        let err = StoreError::WriteFailed {
            path: PathBuf::from("data.json"),
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Error writing file data.json: disk full");
    }
}
