use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use pokeday::dataset::Dataset;
use pokeday::routes::{ProxyState, UpstreamState, proxy_router, upstream_router};
use pokeday_client::{Client, POKEMON_OF_DAY_PATH};
use pokeday_core::{MessageRotator, ThemeResolver, TypeStyleResolver, day_index};

/// pokeday - Pokemon of the Day
#[derive(Parser)]
#[command(name = "pokeday")]
#[command(about = "Deterministic Pokemon-of-the-day selection and theming", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the public proxy server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Start the private provider that owns the day-to-entry mapping
    Upstream {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch today's entry and print it with its theme and message
    Today {
        /// Base URL of the public server (overrides config file)
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pokeday::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pokeday::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Upstream { host, port } => upstream_command(config, host, port).await,
        Commands::Today { base_url } => today_command(config, base_url).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: pokeday::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting pokeday proxy server...");

    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    let upstream = Client::new(
        config.upstream.base_url.clone(),
        Duration::from_secs(config.upstream.timeout_secs),
    )?;
    tracing::info!(base_url = %config.upstream.base_url, "Proxying to upstream provider");

    let app = proxy_router(ProxyState { upstream });
    pokeday::server::serve(app, &host, port).await
}

#[tracing::instrument(skip(config))]
async fn upstream_command(
    config: pokeday::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting pokeday upstream provider...");

    let host = host_override.unwrap_or(config.upstream.host);
    let port = port_override.unwrap_or(config.upstream.port);

    let dataset = Dataset::load(&config.data.file)?;
    if dataset.is_empty() {
        tracing::warn!(file = %config.data.file, "Dataset is empty; /today will respond 503");
    } else {
        tracing::info!(file = %config.data.file, entries = dataset.len(), "Dataset loaded");
    }

    let app = upstream_router(UpstreamState {
        dataset: Arc::new(dataset),
    });
    pokeday::server::serve(app, &host, port).await
}

#[tracing::instrument(skip(config))]
async fn today_command(config: pokeday::Config, base_url_override: Option<String>) -> Result<()> {
    let base_url = base_url_override.unwrap_or(config.client.base_url);
    let client = Client::new(base_url, Duration::from_secs(config.upstream.timeout_secs))?;

    let entry = client.fetch_entry(POKEMON_OF_DAY_PATH).await?;
    let theme = ThemeResolver::default().resolve(&entry.color)?;
    let today = Utc::now().date_naive();
    let message = MessageRotator::default().pick(today).to_string();

    println!("Day {}: {}", day_index(today), entry.name);
    println!(
        "Color {}: primary {} / secondary {} / accent {}",
        entry.color, theme.primary, theme.secondary, theme.accent
    );
    let type_styles = TypeStyleResolver::default();
    for type_name in &entry.types {
        match type_styles.resolve(type_name) {
            Ok(style) => println!("Type {}: effect {}", type_name, style.effect),
            Err(e) => tracing::warn!("Skipping type styling: {}", e),
        }
    }
    println!("Normal sprite: {}", entry.normal_url);
    println!("Shiny sprite:  {}", entry.shiny_url);
    println!("{}", message);

    Ok(())
}
