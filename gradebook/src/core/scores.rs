//! Score collection across a classroom roster.

use crate::gradebook::{Score, Students};

/// Flatten every rostered student's scores for `classroom`, in roster order.
///
/// Students without a score sheet for the classroom contribute nothing.
pub fn collect_scores(roster: &[String], classroom: &str, students: &Students) -> Vec<Score> {
    roster
        .iter()
        .filter_map(|name| students.get(name).and_then(|sheet| sheet.get(classroom)))
        .flat_map(|scores| scores.iter().copied())
        .collect()
}
