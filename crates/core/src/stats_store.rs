use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use swish_models::{Category, CategoryStats, CategoryTable};
use tracing::{debug, info};

use crate::StoreError;

const FIELDS_PER_CATEGORY: usize = 3;
const FIELD_LEN: usize = std::mem::size_of::<u64>();

/// Exact size of the persisted record: 5 categories x 3 counters x 8 bytes.
pub const RECORD_LEN: usize = Category::COUNT * FIELDS_PER_CATEGORY * FIELD_LEN;

/// The persisted all-time statistics.
///
/// Layout: 15 little-endian `u64` values with no header, ordered by category
/// (see [`Category::ALL`]) and within a category as bytes freed, files
/// deleted, directories removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateRecord {
    pub all_time: CategoryTable,
}

impl StateRecord {
    #[must_use]
    pub const fn new(all_time: CategoryTable) -> Self {
        Self { all_time }
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut bytes = [0u8; RECORD_LEN];
        let values = self
            .all_time
            .entries()
            .iter()
            .flat_map(|s| [s.bytes_freed, s.files_deleted, s.dirs_removed]);

        for (chunk, value) in bytes.chunks_exact_mut(FIELD_LEN).zip(values) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Decodes a record, or `None` when `bytes` is not exactly
    /// [`RECORD_LEN`] long.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != RECORD_LEN {
            return None;
        }

        let mut values = bytes
            .chunks_exact(FIELD_LEN)
            .map(|chunk| <[u8; FIELD_LEN]>::try_from(chunk).map(u64::from_le_bytes));

        let mut entries = [CategoryStats::default(); Category::COUNT];
        for entry in &mut entries {
            *entry = CategoryStats::new(
                values.next()?.ok()?,
                values.next()?.ok()?,
                values.next()?.ok()?,
            );
        }

        Some(Self::new(CategoryTable::from_entries(entries)))
    }
}

/// Loads and saves the [`StateRecord`] at a fixed location, one whole block
/// at a time.
///
/// There is no locking: two processes sharing a location race and the last
/// writer wins.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record. A missing, unreadable or wrongly sized file counts
    /// as no prior state.
    #[must_use]
    pub fn load(&self) -> Option<StateRecord> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) => {
                debug!("No statistics at {:?}: {}", self.path, err);
                return None;
            }
        };

        let metadata = match file.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                debug!("Cannot stat statistics at {:?}: {}", self.path, err);
                return None;
            }
        };
        if !metadata.is_file() || metadata.len() != RECORD_LEN as u64 {
            debug!(
                "Ignoring statistics at {:?}: expected a {} byte file, found {} bytes",
                self.path,
                RECORD_LEN,
                metadata.len()
            );
            return None;
        }

        let mut bytes = [0u8; RECORD_LEN];
        if let Err(err) = file.read_exact(&mut bytes) {
            debug!("Failed to read statistics at {:?}: {}", self.path, err);
            return None;
        }

        StateRecord::from_bytes(&bytes)
    }

    #[must_use]
    pub fn load_or_default(&self) -> StateRecord {
        self.load().unwrap_or_default()
    }

    /// Replaces the stored record, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created, the
    /// file cannot be opened, or the full record cannot be written.
    pub fn save(&self, record: &StateRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io("create directory for", parent, e))?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.path)
            .map_err(|e| StoreError::io("open", &self.path, e))?;
        file.write_all(&record.to_bytes())
            .map_err(|e| StoreError::io("write", &self.path, e))?;

        info!("Statistics saved to {:?}", self.path);
        Ok(())
    }
}
