use std::ops::{AddAssign, Index, IndexMut};

use crate::Category;

/// Space and entry counts reclaimed from one category.
///
/// Counters saturate instead of wrapping; realistic deletion volumes never
/// get near `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub bytes_freed: u64,
    pub files_deleted: u64,
    pub dirs_removed: u64,
}

impl CategoryStats {
    #[must_use]
    pub const fn new(bytes_freed: u64, files_deleted: u64, dirs_removed: u64) -> Self {
        Self {
            bytes_freed,
            files_deleted,
            dirs_removed,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn record_file(&mut self, size: u64) {
        self.bytes_freed = self.bytes_freed.saturating_add(size);
        self.files_deleted = self.files_deleted.saturating_add(1);
    }

    pub fn record_dir(&mut self) {
        self.dirs_removed = self.dirs_removed.saturating_add(1);
    }
}

impl AddAssign for CategoryStats {
    fn add_assign(&mut self, rhs: Self) {
        self.bytes_freed = self.bytes_freed.saturating_add(rhs.bytes_freed);
        self.files_deleted = self.files_deleted.saturating_add(rhs.files_deleted);
        self.dirs_removed = self.dirs_removed.saturating_add(rhs.dirs_removed);
    }
}

/// Per-category counters, indexed by [`Category`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTable {
    entries: [CategoryStats; Category::COUNT],
}

impl CategoryTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_entries(entries: [CategoryStats; Category::COUNT]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub const fn entries(&self) -> &[CategoryStats; Category::COUNT] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryStats)> {
        Category::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn clear(&mut self) {
        self.entries = [CategoryStats::default(); Category::COUNT];
    }
}

impl Index<Category> for CategoryTable {
    type Output = CategoryStats;

    fn index(&self, category: Category) -> &Self::Output {
        &self.entries[category.index()]
    }
}

impl IndexMut<Category> for CategoryTable {
    fn index_mut(&mut self, category: Category) -> &mut Self::Output {
        &mut self.entries[category.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    CurrentRun,
    AllTime,
}

/// The two tables a process keeps: this run (never persisted) and all time
/// (loaded at start, saved at exit).
#[derive(Debug, Clone, Default)]
pub struct StatsTable {
    current: CategoryTable,
    all_time: CategoryTable,
}

impl StatsTable {
    /// Starts a run on top of previously persisted all-time counters.
    #[must_use]
    pub fn with_all_time(all_time: CategoryTable) -> Self {
        Self {
            current: CategoryTable::new(),
            all_time,
        }
    }

    /// Applies a traversal delta to both tables.
    pub fn add_delta(&mut self, category: Category, delta: CategoryStats) {
        self.current[category] += delta;
        self.all_time[category] += delta;
    }

    /// Zeroes the all-time counters of the given categories. The current-run
    /// table is left untouched.
    pub fn reset(&mut self, categories: &[Category]) {
        for &category in categories {
            self.all_time[category] = CategoryStats::default();
        }
    }

    pub fn reset_all_time(&mut self) {
        self.all_time.clear();
    }

    #[must_use]
    pub const fn snapshot(&self, kind: TableKind) -> &CategoryTable {
        match kind {
            TableKind::CurrentRun => &self.current,
            TableKind::AllTime => &self.all_time,
        }
    }
}
