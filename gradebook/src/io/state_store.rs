//! Gradebook load/save with schema + invariant validation.
//!
//! [`StateStore`] is the capability command handlers depend on. The on-disk
//! implementation, [`JsonFileStore`], keeps the whole state in one JSON
//! document that is fully replaced on every commit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::invariants::validate_invariants;
use crate::error::StoreError;
use crate::gradebook::Gradebook;

const GRADEBOOK_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/gradebook/v1.schema.json"
));

/// Load, replace, or reset the persisted gradebook.
pub trait StateStore {
    /// Return the current persisted state.
    fn load(&self) -> Result<Gradebook, StoreError>;

    /// Replace the persisted state with `state`.
    fn commit(&self, state: &Gradebook) -> Result<(), StoreError>;

    /// Replace the persisted state with an empty gradebook.
    fn reset(&self) -> Result<(), StoreError> {
        self.commit(&Gradebook::default())
    }
}

/// Store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Gradebook, StoreError> {
        load_gradebook(&self.path).map_err(|err| StoreError::Unavailable {
            path: self.path.clone(),
            reason: format!("{err:#}"),
        })
    }

    fn commit(&self, state: &Gradebook) -> Result<(), StoreError> {
        write_gradebook(&self.path, state).map_err(|err| {
            warn!(path = %self.path.display(), error = %format!("{err:#}"), "commit failed");
            StoreError::WriteFailed {
                path: self.path.clone(),
                reason: format!("{err:#}"),
            }
        })
    }
}

/// Load and validate a gradebook from disk (schema + invariants).
pub fn load_gradebook(path: &Path) -> Result<Gradebook> {
    debug!(path = %path.display(), "loading gradebook");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read gradebook {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse gradebook {}", path.display()))?;
    validate_schema(&value)?;
    let gradebook: Gradebook = serde_json::from_value(value)
        .with_context(|| format!("deserialize gradebook {}", path.display()))?;
    validate_gradebook_invariants(&gradebook)?;
    debug!(
        students = gradebook.students.len(),
        classrooms = gradebook.classrooms.len(),
        "gradebook loaded"
    );
    Ok(gradebook)
}

/// Atomically write the whole gradebook to disk (temp file + rename).
pub fn write_gradebook(path: &Path, gradebook: &Gradebook) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(gradebook).context("serialize gradebook")?;
    buf.push('\n');
    write_atomic(path, &buf)?;
    info!(
        path = %path.display(),
        students = gradebook.students.len(),
        classrooms = gradebook.classrooms.len(),
        "gradebook committed"
    );
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp gradebook {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("replace gradebook {}", path.display()))?;
    Ok(())
}

fn validate_schema(gradebook: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(GRADEBOOK_SCHEMA).context("parse gradebook schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(gradebook) {
        let messages = compiled
            .iter_errors(gradebook)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "gradebook schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_gradebook_invariants(gradebook: &Gradebook) -> Result<()> {
    let errors = validate_invariants(gradebook);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("gradebook invariants failed: {}", errors.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::enrolled;

    /// Verifies commit → load round-trip yields a deep-equal gradebook.
    #[test]
    fn commit_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(temp.path().join("data.json"));
        let state = enrolled("math", &[("mary", &[90, 70]), ("paul", &[])]);

        store.commit(&state).expect("commit");
        assert_eq!(store.load().expect("load"), state);
    }

    #[test]
    fn commit_writes_the_documented_layout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("data.json");
        JsonFileStore::new(&path).reset().expect("reset");

        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "{\n  \"students\": {},\n  \"classrooms\": {}\n}\n");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn reset_creates_missing_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(temp.path().join("nested/dir/data.json"));
        store.reset().expect("reset");
        assert_eq!(store.load().expect("load"), Gradebook::default());
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = JsonFileStore::new(temp.path().join("data.json"))
            .load()
            .expect_err("missing file");
        assert!(matches!(err, StoreError::Unavailable { .. }));
        assert!(err.to_string().contains("read gradebook"));
    }

    #[test]
    fn load_rejects_schema_violations() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("data.json");
        fs::write(&path, r#"{"students":{"mary":{"math":["ninety"]}},"classrooms":{}}"#)
            .expect("write");

        let err = JsonFileStore::new(&path).load().expect_err("bad schema");
        assert!(err.to_string().contains("schema validation failed"));
    }

    #[test]
    fn load_rejects_one_sided_enrollment() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("data.json");
        fs::write(
            &path,
            r#"{"students":{"mary":{}},"classrooms":{"math":{"teacher":"daniel","students":["mary"]}}}"#,
        )
        .expect("write");

        let err = JsonFileStore::new(&path).load().expect_err("bad invariants");
        assert!(err.to_string().contains("invariants failed"));
    }

    #[test]
    fn failed_commit_keeps_previous_contents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write blocker");
        let store = JsonFileStore::new(blocker.join("data.json"));

        let err = store.commit(&Gradebook::default()).expect_err("write fails");
        assert!(matches!(err, StoreError::WriteFailed { .. }));
        assert!(err.to_string().starts_with("Error writing file"));
        assert_eq!(
            fs::read_to_string(&blocker).expect("read blocker"),
            "not a directory"
        );
    }
}
