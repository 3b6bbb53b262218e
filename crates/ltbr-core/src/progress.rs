//! Reading progress persistence.
//!
//! All documents share one JSON file mapping a digest of the document path
//! to its progress record. Saves read the whole map, replace one entry and
//! rewrite the file; concurrent writers are not coordinated (last one wins).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use sha2::{Digest, Sha256};

/// Progress of one document.
///
/// Fields added after the first release are optional on read so that older
/// records keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Informational; the map key identifies the document.
    pub file_name: String,
    /// 0-based line the reader was on.
    pub line: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,
    #[serde(default)]
    pub read_words: u64,
    #[serde(default)]
    pub reading_seconds: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vocabulary: Vec<String>,
}

/// Older writers stored empty lists as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub type ProgressMap = BTreeMap<String, ProgressEntry>;

/// Lower-hex SHA-256 of the path string.
pub fn hash_path(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Store key for a document: the digest of its absolute path as written.
///
/// No case or trailing-separator normalisation is applied.
pub fn document_key(path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    Ok(hash_path(&absolute.to_string_lossy()))
}

/// Load/save contract for progress records.
pub trait ProgressStore: Send + Sync {
    /// Returns the stored record, or `None` when nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<ProgressEntry>>;

    /// Stores `entry` under `key`, leaving other documents untouched.
    fn save(&self, key: &str, entry: &ProgressEntry) -> Result<()>;
}

/// Progress store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the whole map. A missing file is an empty map.
    pub fn load_all(&self) -> Result<ProgressMap> {
        if !self.path.exists() {
            return Ok(ProgressMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read progress from {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse progress from {}", self.path.display()))
    }

    fn write_all(&self, map: &ProgressMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        map.serialize(&mut serializer)
            .context("Failed to serialize progress")?;
        buf.push(b'\n');

        fs::write(&self.path, buf)
            .with_context(|| format!("Failed to write to {}", self.path.display()))
    }
}

impl ProgressStore for JsonProgressStore {
    fn load(&self, key: &str) -> Result<Option<ProgressEntry>> {
        Ok(self.load_all()?.remove(key))
    }

    fn save(&self, key: &str, entry: &ProgressEntry) -> Result<()> {
        let mut map = self.load_all()?;
        map.insert(key.to_string(), entry.clone());
        self.write_all(&map)?;
        tracing::debug!(key, line = entry.line, "progress saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn entry() -> ProgressEntry {
        ProgressEntry {
            file_name: "quijote.txt".to_string(),
            line: 42,
            notes: vec!["first\nmulti-line".to_string(), "second".to_string()],
            read_words: 1200,
            reading_seconds: 321.5,
            vocabulary: vec!["hidalgo".to_string(), "adarga".to_string()],
        }
    }

    #[test]
    fn test_hash_path_is_stable_lower_hex() {
        let a = hash_path("/books/quijote.txt");
        assert_eq!(a, hash_path("/books/quijote.txt"));
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(a, hash_path("/books/quijote.txt/"));
    }

    #[test]
    fn test_document_key_uses_absolute_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.txt");
        assert_eq!(
            document_key(&path).unwrap(),
            hash_path(&path.to_string_lossy())
        );
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonProgressStore::new(dir.path().join("progress.json"));
        assert_eq!(store.load("abc").unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonProgressStore::new(dir.path().join("nested").join("progress.json"));

        store.save("abc", &entry()).unwrap();
        assert_eq!(store.load("abc").unwrap(), Some(entry()));
    }

    #[test]
    fn test_save_merges_with_other_documents() {
        let dir = tempdir().unwrap();
        let store = JsonProgressStore::new(dir.path().join("progress.json"));

        store.save("one", &entry()).unwrap();
        let other = ProgressEntry {
            file_name: "other.txt".to_string(),
            line: 3,
            ..ProgressEntry::default()
        };
        store.save("two", &other).unwrap();

        let map = store.load_all().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["one"], entry());
        assert_eq!(map["two"], other);
    }

    #[test]
    fn test_written_json_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        JsonProgressStore::new(&path).save("abc", &entry()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("{\n    \"abc\": {\n        \"file_name\""));
    }

    #[test]
    fn test_load_old_record_without_reading_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(
            &path,
            r#"{"abc": {"file_name": "a.txt", "line": 7, "vocabulary": ["uno"], "notes": null}}"#,
        )
        .unwrap();

        let loaded = JsonProgressStore::new(&path).load("abc").unwrap().unwrap();
        assert_eq!(loaded.line, 7);
        assert_eq!(loaded.vocabulary, vec!["uno"]);
        assert!(loaded.notes.is_empty());
        assert_eq!(loaded.read_words, 0);
        assert!(loaded.reading_seconds.abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonProgressStore::new(&path).load("abc").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse progress"));
    }

    #[test]
    fn test_load_blank_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "  \n").unwrap();

        let err = JsonProgressStore::new(&path).load_all().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse progress"));
    }
}
