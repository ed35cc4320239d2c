use clap::Parser;
use color_eyre::eyre::Result;
use std::io;
use swish::{App, Cli};
use swish_config::Settings;
use swish_core::StatsStore;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Install error hooks
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,swish={level},swish_core={level},swish_config={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(verbosity > 1)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    let store = match settings.state_file(cli.state_file.as_deref()) {
        Ok(path) => Some(StatsStore::new(path)),
        Err(e) => {
            warn!("{}; statistics will not be persisted", e);
            None
        }
    };

    let mut app = App::new(&settings, store, io::stdout().lock());
    let result = app.run(&cli.commands);
    app.finish();

    Ok(result?)
}
