//! # Filesystem-backed key/value store
//!
//! [`FileStore`] persists each collection as one file named after its key
//! under a base directory. It is used on desktop platforms to retain the
//! local store across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── agrifeed_users
//! ├── agrifeed_posts
//! └── ...                # one JSON document per collection key
//! ```
//!
//! I/O is best-effort: write errors are ignored, read errors surface as an
//! absent key and the codec substitutes the caller's default.

use std::path::PathBuf;

use crate::codec::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn write(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }
}
