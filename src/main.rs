use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use moviesearch::cli::{Cli, Command};
use moviesearch::config::Config;
use moviesearch::logging::init_tracing;
use moviesearch::output::format_page;
use moviesearch::query::QueryOrchestrator;
use moviesearch::tmdb::{SearchClient, TmdbClient};
use moviesearch::ui::app::App;
use moviesearch::ui::notify::ToastQueue;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let client = TmdbClient::new(&config.api).context("Failed to build HTTP client")?;

    match cli.command {
        Some(Command::Search { query, page, json }) => {
            if query.trim().is_empty() {
                anyhow::bail!("Please enter your search query.");
            }
            let result = client.search(&query, page).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", format_page(&result));
            }
            Ok(())
        }
        None => {
            let stale_after = Duration::from_secs(config.cache.stale_seconds);
            let orchestrator = QueryOrchestrator::new(Arc::new(client), stale_after);
            let toasts = Arc::new(ToastQueue::default());
            let mut app = App::new(orchestrator, toasts.clone());
            if let Some(query) = cli.query {
                app.submit_search(query);
            }
            tracing::info!("Starting interactive search");
            moviesearch::ui::run(app, toasts, &config).await?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
