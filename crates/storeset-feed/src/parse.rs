//! Line-oriented catalog feed parser.
//!
//! The feed is a loose text format: a line starting with the `🖼` marker
//! glyph opens a product block and carries the product URL; following lines
//! are outlet names (optionally `- ` bulleted) until the next marker. A line
//! reading `hết hàng` clears the outlets accumulated so far in the block.

use std::collections::HashSet;

use storeset_core::{extract_product_id, humanize_slug, Catalog, Product};

const BLOCK_MARKER: char = '🖼';
const OUT_OF_STOCK_SENTINEL: &str = "hết hàng";

/// Accumulates one product block while scanning the feed.
struct ParsedBlock {
    url: String,
    id: String,
    name: String,
    stores: Vec<String>,
}

impl ParsedBlock {
    fn open(url: &str) -> Self {
        let slug = url.rsplit('/').next().unwrap_or("");
        let clean_slug = match slug.split('?').next() {
            Some(s) if !s.is_empty() => s,
            _ => slug,
        };
        let id = extract_product_id(clean_slug);
        let name = humanize_slug(clean_slug, &id);
        Self {
            url: url.to_string(),
            id,
            name,
            stores: Vec::new(),
        }
    }

    /// Closes the block: trims outlet names, drops empties, and deduplicates
    /// (case-sensitive) while preserving first-appearance order.
    fn finalize(self) -> Product {
        let mut seen = HashSet::new();
        let mut stores = Vec::new();
        for store in self.stores {
            let trimmed = store.trim();
            if trimmed.is_empty() || !seen.insert(trimmed.to_string()) {
                continue;
            }
            stores.push(trimmed.to_string());
        }
        Product {
            id: self.id,
            url: self.url,
            name: self.name,
            stores,
        }
    }
}

/// Parses the raw feed text into a [`Catalog`].
///
/// Malformed content never fails the parse: lines before the first marker
/// are ignored, and repeated blocks for the same id are merged (newer
/// `url`/`name` win, outlet sets are unioned).
#[must_use]
pub fn parse_catalog(text: &str) -> Catalog {
    let mut catalog = Catalog::new();
    let mut current: Option<ParsedBlock> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(BLOCK_MARKER) {
            if let Some(block) = current.take() {
                catalog.upsert(block.finalize());
            }
            current = Some(ParsedBlock::open(rest.trim()));
            continue;
        }

        let Some(block) = current.as_mut() else {
            tracing::debug!(line, "ignoring line before first block marker");
            continue;
        };

        if line.to_lowercase() == OUT_OF_STOCK_SENTINEL {
            // The sentinel only resets what was accumulated so far; later
            // outlet lines in the same block still append.
            block.stores.clear();
            continue;
        }

        let store = line.strip_prefix('-').map_or(line, str::trim_start);
        block.stores.push(store.to_string());
    }

    if let Some(block) = current.take() {
        catalog.upsert(block.finalize());
    }

    catalog
}
