use std::fs;
use std::io;
use std::path::Path;

use swish_models::CategoryStats;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// The file system operations a cleaning pass performs.
pub trait FileSystem {
    /// Size in bytes of a non-directory entry, without following symlinks.
    fn file_size(&self, path: &Path) -> io::Result<u64>;
    fn remove_file(&self, path: &Path) -> io::Result<()>;
    /// Removes an empty directory.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn file_size(&self, path: &Path) -> io::Result<u64> {
        fs::symlink_metadata(path).map(|metadata| metadata.len())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }
}

/// Deletes everything below a directory and measures what was removed.
///
/// Every failure is local to the entry it happened on: the entry is skipped,
/// nothing is counted for it, and the pass moves on. A directory is only
/// counted when it could be removed, which means all of its children were
/// removed first.
#[derive(Debug, Clone, Default)]
pub struct PathCleaner<F = LocalFs> {
    fs: F,
}

impl PathCleaner {
    #[must_use]
    pub fn new() -> Self {
        Self { fs: LocalFs }
    }
}

impl<F: FileSystem> PathCleaner<F> {
    #[must_use]
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Removes the contents of `root`, leaving `root` itself in place.
    ///
    /// A root that is missing, unreadable or not a directory yields a zero
    /// delta.
    pub fn clean(&self, root: &Path) -> CategoryStats {
        let mut delta = CategoryStats::default();

        // Post-order walk on an explicit stack: children come before their
        // directory, and nesting depth never grows the call stack.
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .contents_first(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                self.remove_dir(entry.path(), &mut delta);
            } else {
                self.remove_file(entry.path(), &mut delta);
            }
        }

        delta
    }

    fn remove_dir(&self, path: &Path, delta: &mut CategoryStats) {
        match self.fs.remove_dir(path) {
            Ok(()) => {
                trace!("Removed directory {:?}", path);
                delta.record_dir();
            }
            Err(err) => debug!("Keeping directory {:?}: {}", path, err),
        }
    }

    fn remove_file(&self, path: &Path, delta: &mut CategoryStats) {
        let size = match self.fs.file_size(path) {
            Ok(size) => size,
            Err(err) => {
                debug!("Skipping {:?}, size unavailable: {}", path, err);
                return;
            }
        };

        match self.fs.remove_file(path) {
            Ok(()) => {
                trace!("Removed {:?} ({} bytes)", path, size);
                delta.record_file(size);
            }
            Err(err) => debug!("Failed to remove {:?}: {}", path, err),
        }
    }
}
