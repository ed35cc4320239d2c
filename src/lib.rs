pub mod app;
pub mod cli;
pub mod report;

pub use app::App;
pub use cli::{Cli, Command};
