// File: src/persistence.rs
use crate::error::StoreError;
use crate::store::UserHistoryStore;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.to_path_buf(), source }
}

/// Writes a snapshot of `store` to `path`, atomically replacing any previous one.
pub fn save_to_disk(store: &UserHistoryStore, path: &Path) -> Result<(), StoreError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(io_error(parent_dir))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_error(parent_dir))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, store).map_err(StoreError::Encode)?;
        writer.flush().map_err(io_error(path))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| StoreError::Io { path: path.to_path_buf(), source: e.error })?;
    tracing::info!(
        path = %path.display(),
        unigrams = store.unigram_count(),
        ngrams = store.ngram_count(),
        "user history saved"
    );
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<UserHistoryStore, StoreError> {
    let file = File::open(path).map_err(io_error(path))?;
    let reader = BufReader::new(file);
    let store: UserHistoryStore = bincode::deserialize_from(reader)
        .map_err(|source| StoreError::Decode { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), "user history loaded");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ContextWindow;
    use crate::core::types::HIGH_FREQUENCY;
    use crate::store::DictionaryStore;

    #[test]
    fn snapshot_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.bin");

        let mut store = UserHistoryStore::new();
        store.apply_unigram("cat", HIGH_FREQUENCY, 1).unwrap();
        store
            .apply_ngram(&ContextWindow::from_words(["the"]), "cat", HIGH_FREQUENCY, 1)
            .unwrap();

        save_to_disk(&store, &path).unwrap();
        assert_eq!(load_from_disk(&path).unwrap(), store);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_disk(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.bin");
        fs::write(&path, [0xff; 3]).unwrap();
        assert!(matches!(load_from_disk(&path), Err(StoreError::Decode { .. })));
    }
}
