mod catalog;
mod lookup;

use clap::{Parser, Subcommand};

use storeset_core::FeedSource;
use storeset_feed::FeedClient;

#[derive(Debug, Parser)]
#[command(name = "storeset-cli")]
#[command(about = "Product availability lookup against a catalog feed")]
struct Cli {
    /// Feed source override: an http(s) URL or a file path.
    #[arg(long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse the feed and print the product catalog.
    Catalog,
    /// Resolve product tokens and print the outlets covering them.
    Lookup {
        /// Semicolon-separated product ids, slugs, or URLs.
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = storeset_core::load_app_config()?;
    let source = cli
        .source
        .as_deref()
        .map_or(config.feed_source, FeedSource::from_raw);

    let client = FeedClient::new(config.fetch_timeout_secs, &config.user_agent)?;
    let catalog = storeset_feed::load_catalog(&source, &client).await?;

    match cli.command {
        Commands::Catalog => print!("{}", catalog::render_catalog(&catalog)),
        Commands::Lookup { query } => print!("{}", lookup::render_lookup(&catalog, &query)),
    }

    Ok(())
}
