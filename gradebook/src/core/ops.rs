//! State transitions and queries for the six gradebook operations.
//!
//! Transitions take the current state by reference and return a new root
//! state; the input is never modified. Preconditions are checked in a fixed
//! order and the first failure is returned as a [`Rejection`].

use crate::core::args::{Enrollment, NewClassroom, ScoreEntry};
use crate::core::math::average;
use crate::core::scores::collect_scores;
use crate::error::Rejection;
use crate::gradebook::{Classroom, Gradebook, ScoreSheet};

/// Create every student in `names` that does not exist yet.
///
/// Returns the new state and the names actually created, in input order.
/// Rejected only when no name is new.
pub fn create_students(
    state: &Gradebook,
    names: &[String],
) -> Result<(Gradebook, Vec<String>), Rejection> {
    let mut next = state.clone();
    let mut created = Vec::new();
    for name in names {
        if next.has_student(name) {
            continue;
        }
        next.students.insert(name.clone(), ScoreSheet::new());
        created.push(name.clone());
    }
    if created.is_empty() {
        return Err(Rejection::StudentExists);
    }
    Ok((next, created))
}

/// Append a score to an enrolled student's sheet for the classroom.
pub fn add_score(state: &Gradebook, entry: &ScoreEntry) -> Result<Gradebook, Rejection> {
    ensure_student(state, &entry.student)?;
    ensure_enrolled(state, &entry.student, &entry.classroom)?;

    let mut next = state.clone();
    next.students
        .get_mut(&entry.student)
        .and_then(|sheet| sheet.get_mut(&entry.classroom))
        .ok_or_else(|| not_enrolled(&entry.student, &entry.classroom))?
        .push(entry.score);
    Ok(next)
}

/// Average of one student's scores in one classroom.
pub fn student_average(state: &Gradebook, query: &Enrollment) -> Result<f64, Rejection> {
    ensure_student(state, &query.student)?;
    let scores = state
        .scores(&query.student, &query.classroom)
        .ok_or_else(|| not_enrolled(&query.student, &query.classroom))?;
    average(scores).ok_or_else(|| Rejection::NoGrades {
        student: query.student.clone(),
        classroom: query.classroom.clone(),
    })
}

/// Register a new classroom with an empty roster.
pub fn create_classroom(state: &Gradebook, input: &NewClassroom) -> Result<Gradebook, Rejection> {
    if state.has_classroom(&input.classroom) {
        return Err(Rejection::ClassroomExists);
    }
    let mut next = state.clone();
    next.classrooms
        .insert(input.classroom.clone(), Classroom::new(input.teacher.clone()));
    Ok(next)
}

/// Enroll a student: roster entry and empty score sheet in one transition.
pub fn enroll_student(state: &Gradebook, input: &Enrollment) -> Result<Gradebook, Rejection> {
    let classroom = state
        .classrooms
        .get(&input.classroom)
        .ok_or_else(|| unknown_classroom(&input.classroom))?;
    ensure_student(state, &input.student)?;
    if classroom.has_student(&input.student) {
        return Err(Rejection::AlreadyEnrolled {
            student: input.student.clone(),
            classroom: input.classroom.clone(),
        });
    }

    let mut next = state.clone();
    if let Some(classroom) = next.classrooms.get_mut(&input.classroom) {
        classroom.students.push(input.student.clone());
    }
    if let Some(sheet) = next.students.get_mut(&input.student) {
        sheet.insert(input.classroom.clone(), Vec::new());
    }
    Ok(next)
}

/// Average of every enrolled student's scores in a classroom.
///
/// `Ok(None)` means the roster is non-empty but nobody has a score yet.
pub fn classroom_average(state: &Gradebook, classroom: &str) -> Result<Option<f64>, Rejection> {
    let record = state
        .classrooms
        .get(classroom)
        .ok_or_else(|| unknown_classroom(classroom))?;
    if record.students.is_empty() {
        return Err(Rejection::NoStudents {
            classroom: classroom.to_string(),
        });
    }
    let scores = collect_scores(&record.students, classroom, &state.students);
    Ok(average(&scores))
}

fn ensure_student(state: &Gradebook, student: &str) -> Result<(), Rejection> {
    if state.has_student(student) {
        return Ok(());
    }
    Err(Rejection::UnknownStudent {
        student: student.to_string(),
    })
}

fn ensure_enrolled(state: &Gradebook, student: &str, classroom: &str) -> Result<(), Rejection> {
    match state.scores(student, classroom) {
        Some(_) => Ok(()),
        None => Err(not_enrolled(student, classroom)),
    }
}

fn not_enrolled(student: &str, classroom: &str) -> Rejection {
    Rejection::NotEnrolled {
        student: student.to_string(),
        classroom: classroom.to_string(),
    }
}

fn unknown_classroom(classroom: &str) -> Rejection {
    Rejection::UnknownClassroom {
        classroom: classroom.to_string(),
    }
}
