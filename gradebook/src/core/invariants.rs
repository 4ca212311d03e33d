//! Semantic invariants not expressible via JSON Schema.

use std::collections::HashSet;

use crate::gradebook::Gradebook;

/// Check the bidirectional enrollment invariants of a gradebook:
/// - Every rostered student exists
/// - No roster lists the same student twice
/// - Every roster entry has a score sheet for that classroom
/// - Every score sheet belongs to an existing classroom
pub fn validate_invariants(gradebook: &Gradebook) -> Vec<String> {
    let mut errors = Vec::new();

    for (classroom_name, classroom) in &gradebook.classrooms {
        let mut seen = HashSet::new();
        for student in &classroom.students {
            if !seen.insert(student.as_str()) {
                errors.push(format!(
                    "classrooms/{classroom_name}: duplicate student '{student}'"
                ));
            }
            match gradebook.students.get(student) {
                None => errors.push(format!(
                    "classrooms/{classroom_name}: unknown student '{student}'"
                )),
                Some(sheet) if !sheet.contains_key(classroom_name) => errors.push(format!(
                    "students/{student}: missing scores for enrolled classroom '{classroom_name}'"
                )),
                Some(_) => {}
            }
        }
    }

    for (student, sheet) in &gradebook.students {
        for classroom_name in sheet.keys() {
            let enrolled = gradebook
                .classrooms
                .get(classroom_name)
                .is_some_and(|classroom| classroom.has_student(student));
            if !enrolled {
                errors.push(format!(
                    "students/{student}: scores for '{classroom_name}' without enrollment"
                ));
            }
        }
    }

    errors
}
