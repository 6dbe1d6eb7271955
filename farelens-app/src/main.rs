use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use farelens_app::autocomplete::AutocompleteController;
use farelens_app::cli::{Cli, Command};
use farelens_app::config::Config;
use farelens_app::controller::SearchController;
use farelens_app::surface::{ConsoleSurface, ViewSurface};
use farelens_client::{HttpSearchClient, SearchBackend};
use farelens_core::model::SearchQuery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "farelens_app=info,farelens_client=info,farelens_render=info".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;
    tracing::debug!("using search API at {}", config.api.base_url);

    let backend: Arc<dyn SearchBackend> = Arc::new(
        HttpSearchClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_seconds),
        )
        .context("Failed to build HTTP client")?,
    );
    let surface: Arc<dyn ViewSurface> = Arc::new(ConsoleSurface);

    match cli.command {
        Command::Search {
            origin,
            destination,
            departure_date,
            return_date,
            passengers,
        } => {
            let query = SearchQuery::new(
                &origin,
                &destination,
                &departure_date,
                return_date.as_deref(),
                &passengers,
            );
            let controller = SearchController::new(backend, surface);
            controller.submit(&query).await;
        }
        Command::Suggest { query, field } => {
            let controller = AutocompleteController::new(backend, surface);
            controller.input(field, &query).await;
        }
    }

    Ok(())
}
