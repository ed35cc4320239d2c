mod category;
mod statistics;

pub use category::Category;
pub use statistics::{CategoryStats, CategoryTable, StatsTable, TableKind};
