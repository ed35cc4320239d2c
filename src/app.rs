use std::io::{self, Write};

use swish_config::{Settings, Targets};
use swish_core::{Session, StatsStore, StoreError};
use swish_models::{Category, TableKind};
use tracing::{info, warn};

use crate::cli::Command;
use crate::report::write_table;

/// Runs command letters against a [`Session`] and prints progress and
/// reports to `out`.
pub struct App<W: Write> {
    session: Session,
    targets: Targets,
    store: Option<StatsStore>,
    out: W,
}

impl<W: Write> App<W> {
    /// Builds the app, loading all-time statistics from `store` when one is
    /// given. Without a store, statistics start at zero and are not saved.
    pub fn new(settings: &Settings, store: Option<StatsStore>, out: W) -> Self {
        let record = store.as_ref().map(StatsStore::load_or_default).unwrap_or_default();
        Self {
            session: Session::new(record),
            targets: settings.targets.clone(),
            store,
            out,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Processes `commands` left to right. Unknown letters are reported and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the output fails.
    pub fn run(&mut self, commands: &str) -> io::Result<()> {
        for c in commands.chars() {
            match Command::from_char(c) {
                Some(command) => self.execute(command)?,
                None => {
                    warn!("Unknown command: {:?}", c);
                    writeln!(self.out, "[!] Unknown command: '{c}', ignoring...")?;
                }
            }
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Clean(category) => self.clean(category),
            Command::ShowCurrent => {
                writeln!(self.out, "\nCurrent run stats:")?;
                write_table(&mut self.out, self.session.snapshot(TableKind::CurrentRun))
            }
            Command::ShowAllTime => {
                writeln!(self.out, "\nAll-time stats:")?;
                write_table(&mut self.out, self.session.snapshot(TableKind::AllTime))
            }
            Command::ResetAllTime => {
                writeln!(self.out, "[*] Resetting all-time statistics...")?;
                self.session.reset_all_time();
                Ok(())
            }
        }
    }

    fn clean(&mut self, category: Category) -> io::Result<()> {
        let Some(root) = self.targets.path_for(category) else {
            warn!("No location known for {}, skipping", category);
            return writeln!(self.out, "[!] Skipping {category}: location unknown");
        };

        writeln!(self.out, "[*] Cleaning {category} ({})...", root.display())?;
        self.session.clean_category(category, root);
        Ok(())
    }

    /// Persists the all-time statistics, if a store is configured.
    fn save(&self) -> Result<(), StoreError> {
        match &self.store {
            Some(store) => store.save(&self.session.record()),
            None => {
                info!("No statistics location configured, nothing saved");
                Ok(())
            }
        }
    }

    /// Saves the all-time statistics and hands back the output.
    ///
    /// A failed save is reported on stderr and otherwise ignored: the
    /// cleaning already happened and the run still succeeds.
    pub fn finish(self) -> W {
        if let Err(e) = self.save() {
            warn!("{}", e);
            eprintln!("[!] {e}");
        }
        self.out
    }
}
