use std::fmt::Write as _;

use storeset_core::Catalog;
use storeset_query::run_query;

/// Runs one lookup and renders the report: errors and warnings first, then
/// the ordered outlet covering.
pub(crate) fn render_lookup(catalog: &Catalog, query: &str) -> String {
    let report = run_query(query, catalog);
    let mut out = String::new();

    if !report.invalid_tokens.is_empty() {
        let quoted: Vec<String> = report
            .invalid_tokens
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect();
        let _ = writeln!(out, "error: unrecognized tokens: {}", quoted.join(", "));
    }
    if !report.missing_ids.is_empty() {
        let upper: Vec<String> = report
            .missing_ids
            .iter()
            .map(|id| id.to_uppercase())
            .collect();
        let _ = writeln!(out, "error: not found in catalog: {}", upper.join(", "));
    }
    if !report.out_of_stock.is_empty() {
        let _ = writeln!(out, "warning: out of stock: {}", report.out_of_stock.join(", "));
    }

    if report.outlets.is_empty() {
        if report.is_empty() {
            let _ = writeln!(out, "no usable product ids in query");
        } else if report.total_available == 0 {
            let _ = writeln!(out, "no outlet carries the requested products");
        }
        return out;
    }

    let _ = writeln!(
        out,
        "{} outlet(s) cover {} product(s):",
        report.outlets.len(),
        report.total_available
    );
    for (rank, outlet) in report.outlets.iter().enumerate() {
        let badge = if report.covers_all(outlet) {
            " [full coverage]"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{}. {} \u{2014} {} product(s), {} new{}",
            rank + 1,
            outlet.name,
            outlet.products.len(),
            outlet.introduces,
            badge
        );
        for id in &outlet.products {
            let name = catalog.get(id).map_or("", |p| p.name.as_str());
            let _ = writeln!(out, "   {:<10}{}", id.to_uppercase(), name);
        }
    }

    out
}
