//! Command handlers for the six gradebook operations.
//!
//! Every handler runs the same sequence: check the argument bundle, check the
//! operation's preconditions against the loaded state, then either commit a
//! new state through the [`StateStore`] or report a computed value. A rejected
//! command never reaches the store.

use tracing::debug;

use crate::core::args::{
    AddScoreArgs, Arguments, ClassroomAverageArgs, CreateClassroomArgs, CreateStudentArgs,
    EnrollArgs, StudentAverageArgs, check_arguments,
};
use crate::core::ops;
use crate::error::{Rejection, StoreError};
use crate::exit_codes;
use crate::gradebook::Gradebook;
use crate::io::state_store::StateStore;

pub const NO_CLASSROOM_GRADES: &str = "There are no grades for this classroom.";
pub const STATE_CLEARED: &str = "Application state cleared";

/// Result of one handled command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new state was committed.
    Committed { state: Gradebook, message: String },
    /// A query produced output; nothing was written.
    Reported(String),
    /// Arguments or preconditions failed; nothing was written.
    Rejected(Rejection),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Committed { .. } | Outcome::Reported(_) => exit_codes::OK,
            Outcome::Rejected(_) => exit_codes::REJECTED,
        }
    }
}

/// Handlers bound to the store they commit through.
#[derive(Debug)]
pub struct Handlers<S> {
    store: S,
}

impl<S: StateStore> Handlers<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// `student create <name>...`
    pub fn create_student(
        &self,
        args: CreateStudentArgs,
        state: &Gradebook,
    ) -> Result<Outcome, StoreError> {
        let names = match validated(args) {
            Ok(names) => names,
            Err(outcome) => return Ok(outcome),
        };
        match ops::create_students(state, &names) {
            Ok((next, created)) => {
                let message = format!("Added the following students: {}.", created.join(" "));
                self.commit(next, message)
            }
            Err(rejection) => Ok(rejected(rejection)),
        }
    }

    /// `student add_score <student> <score> <classroom>`
    pub fn add_score(&self, args: AddScoreArgs, state: &Gradebook) -> Result<Outcome, StoreError> {
        let entry = match validated(args) {
            Ok(entry) => entry,
            Err(outcome) => return Ok(outcome),
        };
        match ops::add_score(state, &entry) {
            Ok(next) => {
                let message = format!(
                    "Added a score of {} to {}'s {} class.",
                    entry.score, entry.student, entry.classroom
                );
                self.commit(next, message)
            }
            Err(rejection) => Ok(rejected(rejection)),
        }
    }

    /// `student average <student> <classroom>`
    pub fn student_average(
        &self,
        args: StudentAverageArgs,
        state: &Gradebook,
    ) -> Result<Outcome, StoreError> {
        let query = match validated(args) {
            Ok(query) => query,
            Err(outcome) => return Ok(outcome),
        };
        Ok(match ops::student_average(state, &query) {
            Ok(average) => Outcome::Reported(average.to_string()),
            Err(rejection) => rejected(rejection),
        })
    }

    /// `classroom create <classroom> <teacher>`
    pub fn create_classroom(
        &self,
        args: CreateClassroomArgs,
        state: &Gradebook,
    ) -> Result<Outcome, StoreError> {
        let input = match validated(args) {
            Ok(input) => input,
            Err(outcome) => return Ok(outcome),
        };
        match ops::create_classroom(state, &input) {
            Ok(next) => {
                let message = format!(
                    "Added {} class with teacher {}.",
                    input.classroom, input.teacher
                );
                self.commit(next, message)
            }
            Err(rejection) => Ok(rejected(rejection)),
        }
    }

    /// `classroom add_student <classroom> <student>`
    pub fn enroll_student(
        &self,
        args: EnrollArgs,
        state: &Gradebook,
    ) -> Result<Outcome, StoreError> {
        let input = match validated(args) {
            Ok(input) => input,
            Err(outcome) => return Ok(outcome),
        };
        match ops::enroll_student(state, &input) {
            Ok(next) => {
                let message = format!("Added {} to {}.", input.student, input.classroom);
                self.commit(next, message)
            }
            Err(rejection) => Ok(rejected(rejection)),
        }
    }

    /// `classroom average <classroom>`
    pub fn classroom_average(
        &self,
        args: ClassroomAverageArgs,
        state: &Gradebook,
    ) -> Result<Outcome, StoreError> {
        let classroom = match validated(args) {
            Ok(classroom) => classroom,
            Err(outcome) => return Ok(outcome),
        };
        Ok(match ops::classroom_average(state, &classroom) {
            Ok(Some(average)) => Outcome::Reported(average.to_string()),
            Ok(None) => Outcome::Reported(NO_CLASSROOM_GRADES.to_string()),
            Err(rejection) => rejected(rejection),
        })
    }

    /// `clear`: replace the persisted state with an empty gradebook.
    pub fn reset(&self) -> Result<Outcome, StoreError> {
        self.store.reset()?;
        debug!("gradebook reset");
        Ok(Outcome::Reported(STATE_CLEARED.to_string()))
    }

    fn commit(&self, state: Gradebook, message: String) -> Result<Outcome, StoreError> {
        self.store.commit(&state)?;
        Ok(Outcome::Committed { state, message })
    }
}

fn validated<A: Arguments>(args: A) -> Result<A::Valid, Outcome> {
    check_arguments(args).map_err(|missing| rejected(missing.into()))
}

fn rejected(rejection: Rejection) -> Outcome {
    debug!(%rejection, "command rejected");
    Outcome::Rejected(rejection)
}
