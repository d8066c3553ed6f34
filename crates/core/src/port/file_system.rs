// File System Port (for testability)

use std::io;
use std::path::Path;

/// The filesystem operations a job needs
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Size of the file in bytes
    fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// Create `path` and any missing parents; Ok if it already exists
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// In-memory filesystem: files with sizes, plus created directories
    #[derive(Default)]
    pub struct MockFileSystem {
        files: Mutex<HashMap<PathBuf, u64>>,
        dirs: Mutex<HashSet<PathBuf>>,
    }

    impl MockFileSystem {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_file(self, path: impl Into<PathBuf>, size: u64) -> Self {
            self.add_file(path, size);
            self
        }

        pub fn add_file(&self, path: impl Into<PathBuf>, size: u64) {
            self.files.lock().unwrap().insert(path.into(), size);
        }

        pub fn created_dirs(&self) -> Vec<PathBuf> {
            self.dirs.lock().unwrap().iter().cloned().collect()
        }
    }

    impl FileSystem for MockFileSystem {
        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
        }

        fn file_size(&self, path: &Path) -> io::Result<u64> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .copied()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
        }

        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            self.dirs.lock().unwrap().insert(path.to_path_buf());
            Ok(())
        }
    }
}
