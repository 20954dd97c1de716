//! Triage CLI entry point.

use std::sync::Arc;

use clap::Parser;

use triage::cli::{self, Cli, Commands};
use triage::domain::ports::AnalysisStore;
use triage::infrastructure::config::ConfigLoader;
use triage::infrastructure::logging;
use triage::InMemoryAnalysisStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli
        .config
        .as_ref()
        .map_or_else(ConfigLoader::load, ConfigLoader::load_from_file)
    {
        Ok(config) => config,
        Err(err) => {
            cli::handle_error(err, cli.json);
            return;
        }
    };

    logging::init(&config.logging);

    let store: Arc<dyn AnalysisStore> = Arc::new(InMemoryAnalysisStore::new());

    let result = match cli.command {
        Commands::Analyze {
            ref file,
            ref strategy,
            top,
        } => {
            cli::commands::analyze::execute(
                file,
                strategy.clone(),
                top,
                cli.json,
                &config,
                store,
            )
            .await
        }
        Commands::Strategies => cli::commands::strategies::execute(cli.json),
    };

    if let Err(err) = result {
        cli::handle_error(err, cli.json);
    }
}
