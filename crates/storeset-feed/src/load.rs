//! One-time catalog load: fetch or read the feed text, then parse.

use storeset_core::{Catalog, FeedSource};

use crate::client::FeedClient;
use crate::error::FeedError;
use crate::parse::parse_catalog;

/// Loads and parses the catalog from the configured source.
///
/// This is the single asynchronous boundary of the system: it runs once per
/// process, and the returned [`Catalog`] is immutable thereafter.
///
/// # Errors
///
/// Returns [`FeedError`] if the feed text cannot be obtained. Parsing itself
/// never fails.
pub async fn load_catalog(source: &FeedSource, client: &FeedClient) -> Result<Catalog, FeedError> {
    let text = match source {
        FeedSource::Url(url) => client.fetch_feed(url).await?,
        FeedSource::Path(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| FeedError::Io {
                    path: path.display().to_string(),
                    source: e,
                })?
        }
    };

    let catalog = parse_catalog(&text);
    tracing::info!(products = catalog.len(), source = %source, "catalog loaded");
    Ok(catalog)
}
