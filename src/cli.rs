use clap::{ArgAction, Parser};
use std::path::PathBuf;
use swish_models::Category;

const COMMANDS_HELP: &str = "\
Available commands:
  u - Clean user cache (~/.cache)
  s - Clean system cache (/var/cache)
  l - Clean system logs (/var/log)
  t - Clean short-term temporary files (/tmp)
  g - Clean long-term temporary files (/var/tmp)
  c - View current run statistics
  a - View all-time statistics
  r - Reset all-time statistics

Commands run left to right, e.g. `swish utca` cleans the user cache and /tmp,
then prints this run's and the all-time statistics.";

#[derive(Parser, Debug)]
#[command(
    name = "swish",
    version,
    about = "Reclaim disk space from caches, logs and temporary directories",
    after_help = COMMANDS_HELP
)]
pub struct Cli {
    /// Command letters to run, in order
    #[arg(value_name = "COMMANDS")]
    pub commands: String,

    /// Settings file (defaults to <config dir>/swish/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where all-time statistics are stored, overriding the settings file
    #[arg(long, value_name = "FILE")]
    pub state_file: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Clean(Category),
    ShowCurrent,
    ShowAllTime,
    ResetAllTime,
}

impl Command {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'c' => Some(Self::ShowCurrent),
            'a' => Some(Self::ShowAllTime),
            'r' => Some(Self::ResetAllTime),
            _ => Category::from_command(c).map(Self::Clean),
        }
    }
}
