use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tempfile::NamedTempFile;
use tether_core::{KeyValueStore, StorageError};
use tracing::{debug, info};

/// Storage area kept as one `<key>.data` file per key inside the data
/// directory. Clones point at the same directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    #[tracing::instrument(skip(data_dir))]
    pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
        let data_dir = data_dir.to_path_buf();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;

        info!(data_dir = %data_dir.display(), "opened datastore");
        Ok(Self { data_dir })
    }

    pub fn item_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|ch| if matches!(ch, '/' | '\\') { '_' } else { ch })
            .collect();
        self.data_dir.join(format!("{file_name}.data"))
    }
}

impl KeyValueStore for FileStorage {
    #[tracing::instrument(skip(self))]
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.item_path(key);
        debug!(file = %path.display(), "reading item");
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read {
                key: key.to_string(),
                message: format!("{}: {err}", path.display()),
            }),
        }
    }

    #[tracing::instrument(skip(self, value))]
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.item_path(key);
        write_atomic(&path, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: format!("{err:#}"),
        })
    }
}

fn write_atomic(path: &Path, value: &str) -> anyhow::Result<()> {
    debug!(file = %path.display(), bytes = value.len(), "writing item atomically");

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(value.as_bytes())?;
    temp.flush()?;

    temp.persist(path)
        .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use tether_core::KeyValueStore;

    use super::FileStorage;

    #[test]
    fn round_trips_values_and_misses_unknown_keys() {
        let temp = tempdir().expect("tempdir");
        let storage = FileStorage::open(temp.path()).expect("open");

        assert_eq!(storage.get_item("todo-theme").expect("get"), None);

        storage.set_item("todo-theme", "dark").expect("set");
        storage.set_item("todo-theme", "light").expect("overwrite");

        assert_eq!(
            storage.get_item("todo-theme").expect("get").as_deref(),
            Some("light")
        );
        assert!(temp.path().join("todo-theme.data").is_file());
    }

    #[test]
    fn keys_cannot_escape_the_data_dir() {
        let temp = tempdir().expect("tempdir");
        let storage = FileStorage::open(temp.path()).expect("open");

        assert_eq!(
            storage.item_path("../outside"),
            temp.path().join(".._outside.data")
        );
    }
}
