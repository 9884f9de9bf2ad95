use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use corptable_runtime::{
    Config, InMemoryStore, load_seed, resolve_config_path, sample_companies,
};
use tracing::debug;

use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogSink};

/// Config file values with command-line overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    page_size: usize,
    seed: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            page_size: cli
                .page_size
                .map(NonZeroUsize::get)
                .unwrap_or(config.page_size),
            seed: cli.seed.clone().or_else(|| config.seed.clone()),
            log_file: config.log_file.clone(),
        }
    }
}

fn build_store(settings: &Settings) -> Result<InMemoryStore> {
    let seed = match &settings.seed {
        Some(path) => load_seed(path)
            .with_context(|| format!("Failed to load seed file: {}", path.display()))?,
        None => sample_companies(),
    };
    Ok(InMemoryStore::with_seed(seed)?)
}

fn log_sink(command: &Commands, settings: &Settings) -> LogSink {
    match (command, &settings.log_file) {
        (Commands::Tui, Some(path)) => LogSink::File(path.clone()),
        (Commands::Tui, None) => LogSink::Disabled,
        _ => LogSink::Stderr,
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config.as_deref() {
        Some(path) => resolve_config_path(Some(path))?,
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    let settings = Settings::resolve(&cli, &config);

    let command = cli.command.unwrap_or(Commands::Tui);
    logging::init(cli.log_level, log_sink(&command, &settings))?;
    debug!(
        config = %config_path.display(),
        page_size = settings.page_size,
        seed = ?settings.seed,
        "settings resolved"
    );

    let ctx = HandlerContext::new(cli.format);

    match command {
        Commands::Tui => handlers::tui::handle(build_store(&settings)?, settings.page_size),

        Commands::List(args) => {
            handlers::list::handle(&ctx, build_store(&settings)?, settings.page_size, args)
        }

        Commands::Show { id } => handlers::show::handle(&ctx, &build_store(&settings)?, id),

        Commands::Config { command } => {
            handlers::config::handle(&ctx, command, &config_path, &config)
        }
    }
}
