//! Directory-backed key-value store, one file per key.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::storage::ports::{KeyValueError, KeyValueResult, KeyValueStore};

/// File extension appended to every key.
const VALUE_EXTENSION: &str = "json";

/// Key-value store that keeps each value in `<key>.json` inside a directory.
///
/// Access is confined to the opened directory. Writes go to a temporary
/// sibling file first and are renamed into place so a crash never leaves a
/// half-written value behind.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> KeyValueResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(KeyValueError::backend)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(KeyValueError::backend)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

/// Maps a key onto a file name, rejecting anything that could escape the
/// directory or collide with temporary files.
pub(crate) fn file_name(key: &str) -> KeyValueResult<String> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !valid {
        return Err(KeyValueError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{VALUE_EXTENSION}"))
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let name = file_name(key)?;
        let staging = format!(".{name}.tmp");
        self.dir
            .write(&staging, value)
            .map_err(KeyValueError::backend)?;
        self.dir
            .rename(&staging, &self.dir, &name)
            .map_err(KeyValueError::backend)
    }
}

