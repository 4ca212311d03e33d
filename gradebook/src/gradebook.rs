use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single recorded score.
pub type Score = i64;

/// Scores of one student, keyed by classroom name.
pub type ScoreSheet = BTreeMap<String, Vec<Score>>;

/// All students, keyed by student name.
pub type Students = BTreeMap<String, ScoreSheet>;

/// Root application state, persisted whole as `data.json`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gradebook {
    pub students: Students,
    pub classrooms: BTreeMap<String, Classroom>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classroom {
    pub teacher: String,
    pub students: Vec<String>,
}

impl Classroom {
    pub fn new(teacher: impl Into<String>) -> Self {
        Self {
            teacher: teacher.into(),
            students: Vec::new(),
        }
    }

    pub fn has_student(&self, student: &str) -> bool {
        self.students.iter().any(|name| name == student)
    }
}

impl Gradebook {
    pub fn has_student(&self, student: &str) -> bool {
        self.students.contains_key(student)
    }

    pub fn has_classroom(&self, classroom: &str) -> bool {
        self.classrooms.contains_key(classroom)
    }

    /// Scores a student holds for a classroom, `None` if not enrolled.
    pub fn scores(&self, student: &str, classroom: &str) -> Option<&[Score]> {
        self.students
            .get(student)
            .and_then(|sheet| sheet.get(classroom))
            .map(Vec::as_slice)
    }
}
