//! Free-text catalog filtering.

use crate::catalog::Product;

/// Normalize a raw search term for matching.
///
/// Returns None when the term is empty after trimming, meaning "no filter".
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Products whose name, description or category contains `term`,
/// case-insensitively, in catalog order.
///
/// An empty or whitespace-only term keeps the whole catalog.
pub fn filter(products: &[Product], term: &str) -> Vec<Product> {
    match normalize_term(term) {
        None => products.to_vec(),
        Some(needle) => products
            .iter()
            .filter(|product| product.matches_text(&needle))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::money::Money;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("   "), None);
        assert_eq!(normalize_term(" Ball "), Some("ball".to_string()));
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let products = seed::products();
        assert_eq!(filter(&products, ""), products);
        assert_eq!(filter(&products, " \t "), products);
    }

    #[test]
    fn test_filter_persian_term() {
        let products = seed::products();
        assert_eq!(ids(&filter(&products, "توپ فوتبال")), vec!["2", "9"]);
        assert_eq!(ids(&filter(&products, "  تنیس ")), vec!["3", "8"]);
    }

    #[test]
    fn test_filter_matches_category_and_description() {
        let products = seed::products();
        assert_eq!(ids(&filter(&products, "تناسب اندام")), vec!["12", "16"]);
        assert_eq!(ids(&filter(&products, "mlb")), vec!["6"]);
    }

    #[test]
    fn test_filter_no_match() {
        let products = vec![Product::new("1", "Ball", "Round", "Toys", Money::toman(1))];
        assert!(filter(&products, "racket").is_empty());
        assert_eq!(ids(&filter(&products, "TOYS")), vec!["1"]);
    }
}
