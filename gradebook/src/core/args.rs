//! Argument bundles and the validator that guards every command.
//!
//! Each positional argument arrives as an [`Arg`]: either the parsed value or
//! the [`MissingArgument`] diagnostic to show when the caller failed to supply
//! it. A bundle is validated by folding its fields in declaration order; the
//! first missing field wins.

use thiserror::Error;

use crate::gradebook::Score;

pub const STUDENT_NAME: &str = "Please provide a valid student name.";
pub const STUDENT: &str = "Please provide a valid student.";
pub const SCORE: &str = "Please provide a valid score.";
pub const CLASSROOM_NAME: &str = "Please provide a valid classroom name.";
pub const CLASSROOM: &str = "Please provide a valid classroom.";
pub const TEACHER: &str = "Please provide a valid teacher.";

/// A required argument that was absent or failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MissingArgument(pub String);

impl MissingArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A single positional argument: parsed value or the reason it is missing.
pub type Arg<T> = Result<T, MissingArgument>;

/// Non-empty text token.
pub fn text(token: Option<String>, message: &str) -> Arg<String> {
    token
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| MissingArgument::new(message))
}

/// Integer score token. Anything that does not parse as an integer is missing.
pub fn score(token: Option<String>, message: &str) -> Arg<Score> {
    token
        .and_then(|value| value.trim().parse::<Score>().ok())
        .ok_or_else(|| MissingArgument::new(message))
}

/// One or more non-empty names.
pub fn names(tokens: Vec<String>, message: &str) -> Arg<Vec<String>> {
    let names: Vec<String> = tokens
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .collect();
    if names.is_empty() {
        return Err(MissingArgument::new(message));
    }
    Ok(names)
}

/// A bundle of arguments that can be checked as a whole.
pub trait Arguments {
    type Valid;

    /// Return the validated form, or the first missing argument.
    fn validate(self) -> Result<Self::Valid, MissingArgument>;
}

/// Report the first missing argument in `args`, if any.
pub fn check_arguments<A: Arguments>(args: A) -> Result<A::Valid, MissingArgument> {
    args.validate()
}

/// `student create <name>...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStudentArgs {
    pub names: Arg<Vec<String>>,
}

impl CreateStudentArgs {
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self {
            names: names(tokens, STUDENT_NAME),
        }
    }
}

impl Arguments for CreateStudentArgs {
    type Valid = Vec<String>;

    fn validate(self) -> Result<Vec<String>, MissingArgument> {
        self.names
    }
}

/// `student add_score <student> <score> <classroom>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddScoreArgs {
    pub student: Arg<String>,
    pub score: Arg<Score>,
    pub classroom: Arg<String>,
}

impl AddScoreArgs {
    pub fn from_tokens(
        student: Option<String>,
        score_token: Option<String>,
        classroom: Option<String>,
    ) -> Self {
        Self {
            student: text(student, STUDENT_NAME),
            score: score(score_token, SCORE),
            classroom: text(classroom, CLASSROOM_NAME),
        }
    }
}

/// Validated `add_score` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub student: String,
    pub score: Score,
    pub classroom: String,
}

impl Arguments for AddScoreArgs {
    type Valid = ScoreEntry;

    fn validate(self) -> Result<ScoreEntry, MissingArgument> {
        Ok(ScoreEntry {
            student: self.student?,
            score: self.score?,
            classroom: self.classroom?,
        })
    }
}

/// Validated student/classroom pair, shared by `student average` and
/// `classroom add_student`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub student: String,
    pub classroom: String,
}

/// `student average <student> <classroom>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentAverageArgs {
    pub student: Arg<String>,
    pub classroom: Arg<String>,
}

impl StudentAverageArgs {
    pub fn from_tokens(student: Option<String>, classroom: Option<String>) -> Self {
        Self {
            student: text(student, STUDENT),
            classroom: text(classroom, CLASSROOM),
        }
    }
}

impl Arguments for StudentAverageArgs {
    type Valid = Enrollment;

    fn validate(self) -> Result<Enrollment, MissingArgument> {
        Ok(Enrollment {
            student: self.student?,
            classroom: self.classroom?,
        })
    }
}

/// `classroom create <classroom> <teacher>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClassroomArgs {
    pub classroom: Arg<String>,
    pub teacher: Arg<String>,
}

impl CreateClassroomArgs {
    pub fn from_tokens(classroom: Option<String>, teacher: Option<String>) -> Self {
        Self {
            classroom: text(classroom, CLASSROOM_NAME),
            teacher: text(teacher, TEACHER),
        }
    }
}

/// Validated `classroom create` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassroom {
    pub classroom: String,
    pub teacher: String,
}

impl Arguments for CreateClassroomArgs {
    type Valid = NewClassroom;

    fn validate(self) -> Result<NewClassroom, MissingArgument> {
        Ok(NewClassroom {
            classroom: self.classroom?,
            teacher: self.teacher?,
        })
    }
}

/// `classroom add_student <classroom> <student>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollArgs {
    pub classroom: Arg<String>,
    pub student: Arg<String>,
}

impl EnrollArgs {
    pub fn from_tokens(classroom: Option<String>, student: Option<String>) -> Self {
        Self {
            classroom: text(classroom, CLASSROOM_NAME),
            student: text(student, STUDENT_NAME),
        }
    }
}

impl Arguments for EnrollArgs {
    type Valid = Enrollment;

    fn validate(self) -> Result<Enrollment, MissingArgument> {
        let classroom = self.classroom?;
        let student = self.student?;
        Ok(Enrollment { student, classroom })
    }
}

/// `classroom average <classroom>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomAverageArgs {
    pub classroom: Arg<String>,
}

impl ClassroomAverageArgs {
    pub fn from_tokens(classroom: Option<String>) -> Self {
        Self {
            classroom: text(classroom, CLASSROOM),
        }
    }
}

impl Arguments for ClassroomAverageArgs {
    type Valid = String;

    fn validate(self) -> Result<String, MissingArgument> {
        self.classroom
    }
}
