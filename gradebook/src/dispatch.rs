//! Route a parsed command to exactly one handler.

use tracing::debug;

use crate::core::args::{
    AddScoreArgs, ClassroomAverageArgs, CreateClassroomArgs, CreateStudentArgs, EnrollArgs,
    StudentAverageArgs,
};
use crate::error::{Rejection, StoreError};
use crate::handlers::{Handlers, Outcome};
use crate::io::state_store::StateStore;

/// `student <action>` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentAction {
    Create(CreateStudentArgs),
    AddScore(AddScoreArgs),
    Average(StudentAverageArgs),
}

/// `classroom <action>` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassroomAction {
    Create(CreateClassroomArgs),
    AddStudent(EnrollArgs),
    Average(ClassroomAverageArgs),
}

/// A command line after entity/action selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Student(StudentAction),
    Classroom(ClassroomAction),
    /// Reset the state file; does not read the current state.
    Clear,
    /// Unrecognized entity/action combination.
    Invalid,
}

/// Run one request: load → handle → (commit | report).
///
/// `Clear` and `Invalid` never load the state, so `clear` also recovers an
/// unreadable state file.
pub fn run_request<S: StateStore>(
    handlers: &Handlers<S>,
    request: Request,
) -> Result<Outcome, StoreError> {
    debug!(?request, "dispatching");
    match request {
        Request::Clear => handlers.reset(),
        Request::Invalid => Ok(Outcome::Rejected(Rejection::InvalidCommand)),
        Request::Student(action) => {
            let state = handlers.store().load()?;
            match action {
                StudentAction::Create(args) => handlers.create_student(args, &state),
                StudentAction::AddScore(args) => handlers.add_score(args, &state),
                StudentAction::Average(args) => handlers.student_average(args, &state),
            }
        }
        Request::Classroom(action) => {
            let state = handlers.store().load()?;
            match action {
                ClassroomAction::Create(args) => handlers.create_classroom(args, &state),
                ClassroomAction::AddStudent(args) => handlers.enroll_student(args, &state),
                ClassroomAction::Average(args) => handlers.classroom_average(args, &state),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::test_support::{MemoryStore, enrolled};

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn invalid_request_touches_nothing() {
        let handlers = Handlers::new(MemoryStore::default());
        let outcome = run_request(&handlers, Request::Invalid).expect("handled");

        assert_eq!(outcome, Outcome::Rejected(Rejection::InvalidCommand));
        assert_eq!(outcome.exit_code(), exit_codes::REJECTED);
        assert_eq!(handlers.store().load_count(), 0);
        assert!(handlers.store().commits().is_empty());
    }

    #[test]
    fn clear_skips_loading() {
        let handlers = Handlers::new(MemoryStore::unreadable());
        let outcome = run_request(&handlers, Request::Clear).expect("handled");

        assert_eq!(outcome.exit_code(), exit_codes::OK);
        assert_eq!(handlers.store().load_count(), 0);
        assert_eq!(handlers.store().commits().len(), 1);
    }

    #[test]
    fn student_request_loads_once_and_commits_once() {
        let handlers = Handlers::new(MemoryStore::new(enrolled("math", &[("mary", &[])])));
        let request = Request::Student(StudentAction::AddScore(AddScoreArgs::from_tokens(
            some("mary"),
            some("95"),
            some("math"),
        )));

        let outcome = run_request(&handlers, request).expect("handled");
        assert!(matches!(outcome, Outcome::Committed { .. }));
        assert_eq!(handlers.store().load_count(), 1);
        assert_eq!(handlers.store().commits().len(), 1);
    }

    #[test]
    fn unreadable_state_fails_fast() {
        let handlers = Handlers::new(MemoryStore::unreadable());
        let request = Request::Classroom(ClassroomAction::Average(
            ClassroomAverageArgs::from_tokens(some("math")),
        ));

        let err = run_request(&handlers, request).expect_err("load fails");
        assert!(matches!(err, StoreError::Unavailable { .. }));
    }

    #[test]
    fn clear_then_query_reports_missing_entities() {
        let handlers = Handlers::new(MemoryStore::new(enrolled("math", &[("mary", &[90])])));
        run_request(&handlers, Request::Clear).expect("clear");

        let outcome = run_request(
            &handlers,
            Request::Student(StudentAction::Average(StudentAverageArgs::from_tokens(
                some("mary"),
                some("math"),
            ))),
        )
        .expect("handled");
        assert_eq!(
            outcome,
            Outcome::Rejected(Rejection::UnknownStudent {
                student: "mary".to_string()
            })
        );

        let outcome = run_request(
            &handlers,
            Request::Classroom(ClassroomAction::Create(CreateClassroomArgs::from_tokens(
                some("math"),
                some("daniel"),
            ))),
        )
        .expect("handled");
        assert!(matches!(outcome, Outcome::Committed { .. }));
    }

    #[test]
    fn create_student_dispatches_to_student_handler() {
        let handlers = Handlers::new(MemoryStore::default());
        let request = Request::Student(StudentAction::Create(CreateStudentArgs::from_tokens(
            vec!["mary".to_string(), "paul".to_string()],
        )));
        let outcome = run_request(&handlers, request).expect("handled");
        let Outcome::Committed { state, .. } = outcome else {
            panic!("expected commit");
        };
        assert!(state.has_student("mary") && state.has_student("paul"));
    }

    #[test]
    fn enroll_dispatches_to_classroom_handler() {
        let handlers = Handlers::new(MemoryStore::default());
        for request in [
            Request::Student(StudentAction::Create(CreateStudentArgs::from_tokens(vec![
                "mary".to_string(),
            ]))),
            Request::Classroom(ClassroomAction::Create(CreateClassroomArgs::from_tokens(
                some("math"),
                some("daniel"),
            ))),
            Request::Classroom(ClassroomAction::AddStudent(EnrollArgs::from_tokens(
                some("math"),
                some("mary"),
            ))),
        ] {
            run_request(&handlers, request).expect("handled");
        }

        let state = handlers.store().load().expect("load");
        assert!(state.classrooms["math"].has_student("mary"));
        assert_eq!(state.scores("mary", "math"), Some(&[][..]));
    }
}
