use std::path::Path;

use swish_models::{Category, CategoryStats, CategoryTable, StatsTable, TableKind};
use tracing::info;

use crate::{FileSystem, LocalFs, PathCleaner, StateRecord};

/// The statistics of one process lifetime and the cleaner that feeds them.
///
/// Commands are applied strictly in the order they are called; nothing here
/// is shared between threads.
#[derive(Debug, Clone)]
pub struct Session<F = LocalFs> {
    cleaner: PathCleaner<F>,
    stats: StatsTable,
}

impl Session {
    /// Starts a session on top of previously persisted counters.
    #[must_use]
    pub fn new(record: StateRecord) -> Self {
        Self::with_cleaner(PathCleaner::new(), record)
    }
}

impl<F: FileSystem> Session<F> {
    #[must_use]
    pub fn with_cleaner(cleaner: PathCleaner<F>, record: StateRecord) -> Self {
        Self {
            cleaner,
            stats: StatsTable::with_all_time(record.all_time),
        }
    }

    /// Cleans `root` and credits what was removed to `category` in both the
    /// current-run and all-time tables.
    pub fn clean_category(&mut self, category: Category, root: &Path) -> CategoryStats {
        let delta = self.cleaner.clean(root);
        info!(
            "Cleaned {} ({:?}): {} bytes, {} files, {} directories",
            category, root, delta.bytes_freed, delta.files_deleted, delta.dirs_removed
        );
        self.stats.add_delta(category, delta);
        delta
    }

    #[must_use]
    pub fn snapshot(&self, kind: TableKind) -> &CategoryTable {
        self.stats.snapshot(kind)
    }

    pub fn reset(&mut self, categories: &[Category]) {
        self.stats.reset(categories);
    }

    pub fn reset_all_time(&mut self) {
        info!("Resetting all-time statistics");
        self.stats.reset_all_time();
    }

    /// The all-time table in its persisted form.
    #[must_use]
    pub fn record(&self) -> StateRecord {
        StateRecord::new(*self.stats.snapshot(TableKind::AllTime))
    }
}
