use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use taxonomy_model::CategoryOption;

use crate::error::{PersistError, Result};

/// Fixed storage key for the resolved subject list. The value is a JSON
/// array of option-shaped objects and must round-trip without loss.
pub const SUBJECTS_KEY: &str = "overallCommonSubjects";

/// Durable client-local storage for the resolved subject list.
///
/// The usage profile is one read on session start and one write per
/// completed final-stage selection; there is never a concurrent writer.
/// Loads are tolerant: absent or corrupt stored data reads as an empty
/// list, never an error.
pub trait SubjectStore {
    /// Reads the stored subject list, or an empty list when nothing
    /// usable is stored.
    fn load(&self) -> Vec<CategoryOption>;

    /// Replaces the stored subject list.
    fn save(&self, subjects: &[CategoryOption]) -> Result<()>;
}

/// File-backed store keeping one JSON document per key in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SubjectStore for JsonFileStore {
    fn load(&self) -> Vec<CategoryOption> {
        let path = self.key_path(SUBJECTS_KEY);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to read stored subjects; treating as absent");
                return Vec::new();
            }
        };
        parse_subjects(&text)
    }

    fn save(&self, subjects: &[CategoryOption]) -> Result<()> {
        let json = serde_json::to_string(subjects).map_err(|source| PersistError::Serialize {
            key: SUBJECTS_KEY.to_string(),
            source,
        })?;
        fs::create_dir_all(&self.dir).map_err(|e| PersistError::io("create", &self.dir, e))?;
        let path = self.key_path(SUBJECTS_KEY);
        // Write through a sibling temp file so a torn write never leaves a
        // half-written document under the live key.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|e| PersistError::io("write", &tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| PersistError::io("rename", &path, e))?;
        Ok(())
    }
}

/// In-memory store for tests and non-durable sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a raw serialized value, valid or not.
    pub fn with_raw(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl SubjectStore for MemoryStore {
    fn load(&self) -> Vec<CategoryOption> {
        let guard = match self.value.lock() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };
        guard.as_deref().map_or_else(Vec::new, parse_subjects)
    }

    fn save(&self, subjects: &[CategoryOption]) -> Result<()> {
        let json = serde_json::to_string(subjects).map_err(|source| PersistError::Serialize {
            key: SUBJECTS_KEY.to_string(),
            source,
        })?;
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(json);
        }
        Ok(())
    }
}

fn parse_subjects(text: &str) -> Vec<CategoryOption> {
    match serde_json::from_str(text) {
        Ok(subjects) => subjects,
        Err(error) => {
            warn!(key = SUBJECTS_KEY, %error, "stored subjects are not valid JSON; treating as absent");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use taxonomy_model::{Association, Category};

    fn temp_store() -> JsonFileStore {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "taxonomy-persist-test-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        JsonFileStore::new(dir)
    }

    fn sample_subjects() -> Vec<CategoryOption> {
        vec![
            CategoryOption::new("Mathematics", "SUB1")
                .with_associations(vec![Association::new("G5", Category::GradeLevel)]),
            CategoryOption::new("Science", "SUB2"),
        ]
    }

    #[test]
    fn file_store_round_trips_subjects() {
        let store = temp_store();
        let subjects = sample_subjects();
        store.save(&subjects).expect("save subjects");
        assert_eq!(store.load(), subjects);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let store = temp_store();
        store.save(&sample_subjects()).expect("save subjects");
        let path = store.key_path(SUBJECTS_KEY);
        fs::write(&path, "{not json").expect("corrupt file");
        assert!(store.load().is_empty());
    }

    #[test]
    fn memory_store_round_trips_and_tolerates_garbage() {
        let store = MemoryStore::new();
        let subjects = sample_subjects();
        store.save(&subjects).expect("save subjects");
        assert_eq!(store.load(), subjects);

        let seeded = MemoryStore::with_raw("[[[");
        assert!(seeded.load().is_empty());
    }
}
