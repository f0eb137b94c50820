//! File-backed key-value store playing the role of browser local storage.
//!
//! Each key is one `<key>.json` file in the store directory. Writes go to a
//! temporary file first and are renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use car_market::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                    ch
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(error) if error.kind() == ErrorKind::NotFound => None,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read stored value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        if let Err(error) = fs::write(&staging, value).and_then(|()| fs::rename(&staging, &path)) {
            let _ = fs::remove_file(&staging);
            return Err(error.into());
        }
        tracing::debug!(path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_market::{CarId, CarRecord, HighlightStore, HIGHLIGHT_STORAGE_KEY};

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("car-market-{name}-{}", std::process::id()))
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = scratch_dir("missing");
        let store = JsonFileStore::new(&dir);
        assert_eq!(store.get("nothing-here"), None);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn failed_write_leaves_no_staging_file() -> Result<(), StoreError> {
        let dir = scratch_dir("failed-rename");
        let mut store = JsonFileStore::new(&dir);
        let target = store.path_for(HIGHLIGHT_STORAGE_KEY);
        // A non-empty directory in place of the value file makes the rename fail.
        fs::create_dir_all(&target)?;
        fs::write(target.join("occupied"), "x")?;

        let result = store.set(HIGHLIGHT_STORAGE_KEY, "[]");

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert!(!target.with_extension("json.tmp").exists());
        fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[test]
    fn set_creates_directory_and_round_trips() -> Result<(), StoreError> {
        let dir = scratch_dir("roundtrip");
        let mut store = JsonFileStore::new(dir.join("nested"));

        store.set(HIGHLIGHT_STORAGE_KEY, "[]")?;
        store.set(HIGHLIGHT_STORAGE_KEY, "[1]")?;

        assert_eq!(store.get(HIGHLIGHT_STORAGE_KEY).as_deref(), Some("[1]"));
        assert!(store.path_for(HIGHLIGHT_STORAGE_KEY).ends_with("highlightedCars.json"));
        fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let store = JsonFileStore::new("/tmp/store");
        assert_eq!(
            store.path_for("../etc/passwd"),
            PathBuf::from("/tmp/store/___etc_passwd.json")
        );
    }

    #[test]
    fn highlights_persist_across_store_instances() -> Result<(), StoreError> {
        let dir = scratch_dir("highlights");
        let mut highlights = HighlightStore::load(JsonFileStore::new(&dir));
        highlights.add(CarRecord::new(1, "Toyota Camry", "Camry"))?;
        highlights.add(CarRecord::new(2, "Honda Civic", "Civic"))?;
        highlights.remove(&CarId::Number(1))?;

        let reopened = HighlightStore::load(JsonFileStore::new(&dir));

        assert_eq!(reopened.cars(), highlights.cars());
        fs::remove_dir_all(dir)?;
        Ok(())
    }
}
