mod cleaner;
mod error;
mod session;
mod stats_store;

pub use cleaner::{FileSystem, LocalFs, PathCleaner};
pub use error::StoreError;
pub use session::Session;
pub use stats_store::{RECORD_LEN, StateRecord, StatsStore};
