use std::{
    fs,
    io::{ErrorKind, Write as _},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::instrument;

use super::{KeyValueStore, StorageError};

/// Stores each key as its own file in `directory`. Every write goes to its
/// own uniquely named temporary file that is then renamed over the old one,
/// so readers only ever see a complete value even with concurrent writers.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// The directory is created on the first write if it does not exist
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let is_plain_name = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !is_plain_name {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    #[instrument(err(Debug))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(value), err(Debug))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.directory)?;
        let mut temp_file = NamedTempFile::new_in(&self.directory)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    #[instrument(err(Debug))]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path()).set("erp_session", "kept").unwrap();

        let reopened = FileStore::new(dir.path());

        assert_eq!(
            reopened.get("erp_session").unwrap().as_deref(),
            Some("kept")
        );
    }

    #[test]
    fn creates_missing_directory_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("a").join("b"));

        store.set("k", "v").unwrap();

        let names: Vec<_> = fs::read_dir(store.directory())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }

    #[test]
    fn concurrent_writers_never_expose_a_partial_value() {
        const VALUE_LEN: usize = 64 * 1024;
        fn value_for(writer: usize) -> String {
            writer.to_string().repeat(VALUE_LEN)
        }
        fn is_whole(value: &str) -> bool {
            value.len() == VALUE_LEN && value.bytes().all(|b| b == value.as_bytes()[0])
        }
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("erp_session", &value_for(0)).unwrap();

        let (failed_writes, bad_reads) = std::thread::scope(|s| {
            let writers: Vec<_> = (0..4)
                .map(|writer| {
                    let store = &store;
                    s.spawn(move || {
                        let value = value_for(writer);
                        (0..50)
                            .filter(|_| store.set("erp_session", &value).is_err())
                            .count()
                    })
                })
                .collect();
            let readers: Vec<_> = (0..2)
                .map(|_| {
                    let store = &store;
                    s.spawn(move || {
                        (0..100)
                            .filter(|_| {
                                !matches!(store.get("erp_session"), Ok(Some(v)) if is_whole(&v))
                            })
                            .count()
                    })
                })
                .collect();
            let failed_writes: usize = writers.into_iter().map(|h| h.join().unwrap()).sum();
            let bad_reads: usize = readers.into_iter().map(|h| h.join().unwrap()).sum();
            (failed_writes, bad_reads)
        });

        assert_eq!(failed_writes, 0);
        assert_eq!(bad_reads, 0);
        assert!(is_whole(&store.get("erp_session").unwrap().unwrap()));
    }

    #[test]
    fn missing_key_and_double_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never_created"));

        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
        store.remove("k").unwrap();
    }

    #[rstest]
    #[case::empty("")]
    #[case::parent("../escape")]
    #[case::separator("a/b")]
    #[case::dot("k.json")]
    fn rejects_keys_that_are_not_plain_names(#[case] key: &str) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(matches!(
            store.set(key, "v"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
