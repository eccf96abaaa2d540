//! Query input parsing: one raw string of `;`-separated tokens into a
//! deduplicated, ordered id list plus per-token diagnostics.

use std::collections::HashSet;

use storeset_core::{resolve_token, Catalog};

/// Result of tokenizing and resolving one raw query string.
#[derive(Debug, Default, Clone)]
pub struct ParsedInput {
    /// Resolved ids, deduplicated, first-occurrence order. Ids without a
    /// catalog entry are kept here so classification reports them as missing.
    pub ids: Vec<String>,
    /// Tokens that failed identifier resolution, in input order.
    pub invalid_tokens: Vec<String>,
    /// Tokens that resolved but have no catalog entry, in input order.
    pub unknown_tokens: Vec<String>,
}

/// Splits `raw` on `;`, resolves each token, and buckets the outcomes.
///
/// Never fails: unresolvable tokens land in `invalid_tokens` and processing
/// continues with the rest.
#[must_use]
pub fn parse_query_input(raw: &str, catalog: &Catalog) -> ParsedInput {
    let mut parsed = ParsedInput::default();
    let mut seen = HashSet::new();

    for token in raw.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        let Some(id) = resolve_token(token) else {
            parsed.invalid_tokens.push(token.to_string());
            continue;
        };
        if !catalog.contains(&id) {
            parsed.unknown_tokens.push(token.to_string());
        }
        if seen.insert(id.clone()) {
            parsed.ids.push(id);
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use storeset_core::Product;

    use super::*;

    fn catalog_with(ids: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for id in ids {
            catalog.upsert(Product {
                id: (*id).to_string(),
                url: format!("https://x.vn/ao-thun-{id}"),
                name: "AO Thun".to_string(),
                stores: vec!["Outlet A".to_string()],
            });
        }
        catalog
    }

    #[test]
    fn splits_on_semicolons_and_trims() {
        let parsed = parse_query_input(" ab12 ; cd34 ;; ", &catalog_with(&["ab12", "cd34"]));
        assert_eq!(parsed.ids, vec!["ab12", "cd34"]);
        assert!(parsed.invalid_tokens.is_empty());
        assert!(parsed.unknown_tokens.is_empty());
    }

    #[test]
    fn dedups_preserving_first_occurrence() {
        let parsed = parse_query_input(
            "cd34;AB12;ab12;cd34",
            &catalog_with(&["ab12", "cd34"]),
        );
        assert_eq!(parsed.ids, vec!["cd34", "ab12"]);
    }

    #[test]
    fn url_tokens_resolve_to_ids() {
        let parsed = parse_query_input(
            "https://shop.example.com/ao-thun-basic-ab12.html?ref=x",
            &catalog_with(&["ab12"]),
        );
        assert_eq!(parsed.ids, vec!["ab12"]);
    }

    #[test]
    fn unresolvable_tokens_are_invalid() {
        let parsed = parse_query_input("ab12;???//", &catalog_with(&["ab12"]));
        assert_eq!(parsed.ids, vec!["ab12"]);
        assert_eq!(parsed.invalid_tokens.len(), 1);
    }

    #[test]
    fn unknown_ids_are_kept_and_flagged() {
        let parsed = parse_query_input("ab12;zz99", &catalog_with(&["ab12"]));
        assert_eq!(parsed.ids, vec!["ab12", "zz99"]);
        assert_eq!(parsed.unknown_tokens, vec!["zz99"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let parsed = parse_query_input("  ;; ", &catalog_with(&["ab12"]));
        assert!(parsed.ids.is_empty());
        assert!(parsed.invalid_tokens.is_empty());
    }
}
