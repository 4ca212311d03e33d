//! Test-only helpers for building gradebooks and stores.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::error::StoreError;
use crate::gradebook::{Classroom, Gradebook, Score, ScoreSheet};
use crate::io::state_store::{StateStore, load_gradebook, write_gradebook};

/// Gradebook with the given students, none enrolled anywhere.
pub fn gradebook_with_students(names: &[&str]) -> Gradebook {
    let mut gradebook = Gradebook::default();
    for name in names {
        gradebook
            .students
            .insert(name.to_string(), ScoreSheet::new());
    }
    gradebook
}

/// Gradebook with one classroom and the given students enrolled, in order,
/// each holding the listed scores for that classroom.
pub fn enrolled(classroom: &str, roster: &[(&str, &[Score])]) -> Gradebook {
    let mut gradebook = Gradebook::default();
    let mut record = Classroom::new("teacher");
    for (name, scores) in roster {
        record.students.push(name.to_string());
        gradebook.students.insert(
            name.to_string(),
            ScoreSheet::from([(classroom.to_string(), scores.to_vec())]),
        );
    }
    gradebook.classrooms.insert(classroom.to_string(), record);
    gradebook
}

/// In-memory [`StateStore`] that records every commit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Gradebook>,
    commits: RefCell<Vec<Gradebook>>,
    loads: Cell<usize>,
    unreadable: Cell<bool>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new(state: Gradebook) -> Self {
        Self {
            state: RefCell::new(state),
            ..Self::default()
        }
    }

    /// Store whose `load` fails until something is committed.
    pub fn unreadable() -> Self {
        Self {
            unreadable: Cell::new(true),
            ..Self::default()
        }
    }

    /// Store whose `commit` always fails.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Every successfully committed state, oldest first.
    pub fn commits(&self) -> Vec<Gradebook> {
        self.commits.borrow().clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Gradebook, StoreError> {
        self.loads.set(self.loads.get() + 1);
        if self.unreadable.get() {
            return Err(StoreError::Unavailable {
                path: PathBuf::from("memory"),
                reason: "unreadable".to_string(),
            });
        }
        Ok(self.state.borrow().clone())
    }

    fn commit(&self, state: &Gradebook) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed {
                path: PathBuf::from("memory"),
                reason: "writes disabled".to_string(),
            });
        }
        self.state.replace(state.clone());
        self.commits.borrow_mut().push(state.clone());
        self.unreadable.set(false);
        Ok(())
    }
}

/// Temporary working directory holding a `data.json` state file.
pub struct TempGradebook {
    dir: TempDir,
}

impl TempGradebook {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }

    pub fn write(&self, gradebook: &Gradebook) -> Result<()> {
        write_gradebook(&self.data_path(), gradebook)
    }

    pub fn read(&self) -> Result<Gradebook> {
        load_gradebook(&self.data_path())
    }
}
