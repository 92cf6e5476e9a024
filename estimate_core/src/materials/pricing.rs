//! Keyword price lookup against a material catalog.
//!
//! Matching is a plain case-insensitive substring test with no stemming or
//! accent folding. The first material in catalog order wins, so a catalog
//! holding both "Chapa ST" and "Chapa RU" always prices "chapa" from
//! whichever comes first.

use tracing::debug;

use super::Material;

/// Sale price of the first material whose name contains `keyword`
/// (case-insensitive), or `0.0` when nothing matches.
///
/// # Example
/// ```
/// use estimate_core::materials::{Material, resolve_price};
///
/// let catalog = vec![
///     Material::new("1", "c", "Montante 48mm", "barra", 14.0, 18.5),
///     Material::new("2", "c", "CHAPA ST", "un", 30.0, 42.0),
/// ];
/// assert_eq!(resolve_price(&catalog, "chapa"), 42.0);
/// assert_eq!(resolve_price(&catalog, "tijolo"), 0.0);
/// assert_eq!(resolve_price(&[], "chapa"), 0.0);
/// ```
pub fn resolve_price(materials: &[Material], keyword: &str) -> f64 {
    let needle = keyword.to_lowercase();
    match materials
        .iter()
        .find(|m| m.name.to_lowercase().contains(&needle))
    {
        Some(material) => material.sales_price,
        None => {
            debug!(keyword, catalog_len = materials.len(), "no catalog entry matches keyword");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Material> {
        vec![
            Material::new("1", "c", "Chapa Drywall ST", "un", 30.0, 41.9),
            Material::new("2", "c", "Chapa Drywall RU", "un", 40.0, 55.0),
            Material::new("3", "c", "Cimento CP-II 50kg", "saco", 30.0, 38.0),
        ]
    }

    #[test]
    fn test_case_insensitive_match() {
        let materials = vec![Material::new("1", "c", "CHAPA ST", "un", 30.0, 42.0)];
        assert_eq!(resolve_price(&materials, "chapa"), 42.0);
        assert_eq!(resolve_price(&materials, "Chapa"), 42.0);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(resolve_price(&catalog(), "chapa"), 41.9);

        let mut reversed = catalog();
        reversed.reverse();
        assert_eq!(resolve_price(&reversed, "chapa"), 55.0);
    }

    #[test]
    fn test_substring_anywhere_in_name() {
        assert_eq!(resolve_price(&catalog(), "cp-ii"), 38.0);
        assert_eq!(resolve_price(&catalog(), "drywall ru"), 55.0);
    }

    #[test]
    fn test_no_match_and_empty_catalog() {
        assert_eq!(resolve_price(&catalog(), "tinta"), 0.0);
        assert_eq!(resolve_price(&[], "chapa"), 0.0);
        assert_eq!(resolve_price(&[], ""), 0.0);
    }

    #[test]
    fn test_empty_keyword_matches_first_entry() {
        assert_eq!(resolve_price(&catalog(), ""), 41.9);
    }
}
