//! Biblioteca - headless bootstrap for the book catalog client
//!
//! Wires logging, configuration and the reqwest transport, fires the page
//! load event and prints the rendered page once the initial loads settle.

use anyhow::Result;
use biblioteca_client::api::ReqwestHttpClient;
use biblioteca_client::{App, ClientConfig, DomEvent, RecordingSurface};
use biblioteca_core::PageView;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "biblioteca")]
#[command(author, version, about = "Load the book catalog and print the rendered page", long_about = None)]
struct Cli {
    /// Backend base URL [default: $BIBLIOTECA_API_URL or http://localhost:8080/api]
    #[arg(long)]
    api_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "biblioteca_shell=debug,biblioteca_client=debug,biblioteca_core=debug"
    } else {
        "biblioteca_shell=info,biblioteca_client=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }
    tracing::info!("Using backend at {}", config.api_base_url);

    let http = Arc::new(ReqwestHttpClient::from_config(&config)?);
    let surface = Arc::new(RecordingSurface::new());
    let app = App::new(config, http, surface.clone());

    app.spawn(DomEvent::loaded()).await?;
    tracing::debug!(renders = surface.render_count(), "Initial load settled");

    let page: PageView = app.page().await;
    print!("{}", page.to_html());
    Ok(())
}
