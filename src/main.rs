//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use basketify_stats::{
    cli::{Basketify, Commands},
    commands::{handle_filter_query, handle_local, handle_seasonal, handle_stats, StatsParams},
    Result,
};

fn init_logging(verbose: bool) {
    let default = if verbose { "basketify_stats=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Basketify::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Stats {
            kind,
            name,
            filters,
            json,
            as_of,
        } => {
            handle_stats(StatsParams {
                api_url: app.api_url,
                kind,
                name,
                filters: filters.to_filter_model(),
                as_json: json,
                as_of,
            })
            .await?
        }

        Commands::Seasonal {
            kind,
            name,
            filters,
            json,
        } => handle_seasonal(app.api_url, kind, &name, &filters.to_filter_model(), json).await?,

        Commands::Local {
            path,
            filters,
            json,
            as_of,
        } => handle_local(&path, &filters.to_filter_model(), json, as_of)?,

        Commands::FilterQuery { filters } => handle_filter_query(&filters.to_filter_model()),
    }

    Ok(())
}
