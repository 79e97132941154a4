use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::StorageResult;

/// Key/value slot storage the saved collection is persisted to.
pub trait StorageBackend: Send {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage with one slot already filled.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.into(), value.into());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per slot inside a directory.
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Written to a sibling temp file, then renamed over the slot.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;
        let slot = self.slot_path(key);
        let staged = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&staged, value)?;
        fs::rename(&staged, &slot)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.slot_path(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slots_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("a").unwrap(), None);

        storage.set("a", "[]").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("[]"));

        storage.remove("a").unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
    }

    #[test]
    fn file_slot_lives_in_directory() {
        let dir = temp_dir::TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.child("nested"));

        assert_eq!(storage.get("slot").unwrap(), None);
        storage.set("slot", "[1]").unwrap();
        assert!(dir.child("nested").join("slot.json").exists());
        assert_eq!(storage.get("slot").unwrap().as_deref(), Some("[1]"));

        storage.remove("slot").unwrap();
        storage.remove("slot").unwrap();
        assert_eq!(storage.get("slot").unwrap(), None);
    }

    #[test]
    fn file_slot_is_replaced_whole() {
        let dir = temp_dir::TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.set("slot", r#"[{"title":"A long first value"}]"#).unwrap();
        storage.set("slot", "[]").unwrap();

        assert_eq!(storage.get("slot").unwrap().as_deref(), Some("[]"));
        assert!(!dir.child("slot.json.tmp").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
