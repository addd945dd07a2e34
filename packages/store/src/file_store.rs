//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop. Each entry is a
//! small file named after its key:
//!
//! ```text
//! <base_dir>/
//! ├── user     # User JSON
//! └── dark     # "1" or "0"
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/work-in-taiwan/` |
//! | Linux | `~/.local/share/work-in-taiwan/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\work-in-taiwan\` |

use std::path::PathBuf;

use crate::kv::{KeyValueStore, StorageError};

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
