use std::fmt::Write as _;

use storeset_core::Catalog;

/// Renders the parsed catalog as a fixed-width table, feed order preserved.
pub(crate) fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    if catalog.is_empty() {
        let _ = writeln!(out, "catalog is empty; check the feed source");
        return out;
    }

    let _ = writeln!(out, "{:<10}{:<14}{:<8}NAME", "ID", "STOCK", "STORES");
    for product in catalog.products() {
        let stock = if product.is_out_of_stock() {
            "out of stock"
        } else {
            "in stock"
        };
        let _ = writeln!(
            out,
            "{:<10}{:<14}{:<8}{}",
            product.id.to_uppercase(),
            stock,
            product.stores.len(),
            product.name
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use storeset_core::Product;

    use super::*;

    #[test]
    fn renders_one_row_per_product() {
        let mut catalog = Catalog::new();
        catalog.upsert(Product {
            id: "ab12".to_string(),
            url: "https://x.vn/ao-thun-basic-ab12".to_string(),
            name: "AO Thun Basic".to_string(),
            stores: vec!["Outlet A".to_string()],
        });
        catalog.upsert(Product {
            id: "cd34".to_string(),
            url: "https://x.vn/quan-jean-cd34".to_string(),
            name: "Quan Jean".to_string(),
            stores: vec![],
        });

        let rendered = render_catalog(&catalog);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("AB12"));
        assert!(lines[1].contains("in stock"));
        assert!(lines[2].contains("out of stock"));
    }

    #[test]
    fn empty_catalog_prints_hint() {
        let rendered = render_catalog(&Catalog::new());
        assert!(rendered.contains("catalog is empty"));
    }
}
