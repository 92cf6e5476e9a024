//! # Materials Catalog
//!
//! A company's priced materials, as supplied by the catalog provider. The
//! engine only reads `name` and `sales_price`; the other fields travel along
//! so a catalog file can be round-tripped without loss.
//!
//! Catalog order is significant: price lookup takes the first match, so a
//! catalog is always an ordered `Vec`, never a map.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::materials::{Material, MaterialCatalog};
//!
//! let mut catalog = MaterialCatalog::new("acme");
//! catalog.push(Material::with_markup("m1", "acme", "Chapa ST 12,5mm", "un", 38.0, 30.0));
//!
//! assert_eq!(catalog.materials[0].sales_price, 49.4);
//! assert_eq!(catalog.price_for("chapa"), 49.4);
//! ```

pub mod pricing;

pub use pricing::resolve_price;

use serde::{Deserialize, Serialize};

use crate::units::round_to;

/// Markup applied when a sale price is derived from cost (%)
pub const DEFAULT_BDI_PERCENT: f64 = 30.0;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub company_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Purchase unit as free text ("un", "m²", "saco 50kg", ...)
    pub unit: String,
    pub cost_price: f64,
    pub sales_price: f64,
    /// Consumption per service unit, informational
    #[serde(default)]
    pub consumption: f64,
}

impl Material {
    /// Create a material with explicit cost and sale prices.
    pub fn new(
        id: impl Into<String>,
        company_id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        cost_price: f64,
        sales_price: f64,
    ) -> Self {
        Material {
            id: id.into(),
            company_id: company_id.into(),
            name: name.into(),
            category: None,
            unit: unit.into(),
            cost_price,
            sales_price,
            consumption: 0.0,
        }
    }

    /// Create a material whose sale price is cost plus a BDI markup,
    /// rounded to cents.
    ///
    /// # Example
    /// ```
    /// use estimate_core::materials::Material;
    /// let m = Material::with_markup("m1", "acme", "Cimento CP-II", "saco", 32.0, 25.0);
    /// assert_eq!(m.sales_price, 40.0);
    /// ```
    pub fn with_markup(
        id: impl Into<String>,
        company_id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        cost_price: f64,
        bdi_percent: f64,
    ) -> Self {
        let sales_price = sale_price_with_bdi(cost_price, bdi_percent);
        Material::new(id, company_id, name, unit, cost_price, sales_price)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Profit over cost in percent; 0 when the cost is zero.
    pub fn profit_margin_percent(&self) -> f64 {
        if self.cost_price > 0.0 {
            (self.sales_price - self.cost_price) / self.cost_price * 100.0
        } else {
            0.0
        }
    }
}

/// Sale price for a cost and BDI percentage, rounded to cents.
/// Non-positive costs are not priced (returns 0).
pub fn sale_price_with_bdi(cost_price: f64, bdi_percent: f64) -> f64 {
    if cost_price > 0.0 {
        round_to(cost_price * (1.0 + bdi_percent / 100.0), 2)
    } else {
        0.0
    }
}

/// Ordered catalog snapshot for one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialCatalog {
    pub company_id: String,
    pub materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new(company_id: impl Into<String>) -> Self {
        MaterialCatalog {
            company_id: company_id.into(),
            materials: Vec::new(),
        }
    }

    /// Append a material, keeping insertion order.
    pub fn push(&mut self, material: Material) {
        self.materials.push(material);
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Catalog ordered by name, the order the catalog provider returns.
    /// The sort is stable, so entries with equal names keep their relative order.
    pub fn sorted_by_name(&self) -> MaterialCatalog {
        let mut materials = self.materials.clone();
        materials.sort_by(|a, b| a.name.cmp(&b.name));
        MaterialCatalog {
            company_id: self.company_id.clone(),
            materials,
        }
    }

    /// First-match sale price for a keyword (see [`resolve_price`]).
    pub fn price_for(&self, keyword: &str) -> f64 {
        resolve_price(&self.materials, keyword)
    }

    /// Stock valuation over every entry, one unit of each.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::of(&self.materials)
    }
}

/// Financial snapshot of a catalog: what one unit of every item costs and
/// sells for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub item_count: usize,
    /// Sum of cost prices
    pub total_cost: f64,
    /// Sum of sale prices
    pub total_sale: f64,
    /// total_sale - total_cost
    pub projected_profit: f64,
    /// Profit over cost in percent; 0 when the total cost is zero
    pub average_margin_percent: f64,
}

impl CatalogSummary {
    /// Summarize a slice of materials.
    ///
    /// # Example
    /// ```
    /// use estimate_core::materials::{CatalogSummary, Material};
    /// let items = [
    ///     Material::new("1", "c", "Chapa ST", "un", 30.0, 40.0),
    ///     Material::new("2", "c", "Montante", "barra", 10.0, 12.0),
    /// ];
    /// let summary = CatalogSummary::of(&items);
    /// assert_eq!(summary.projected_profit, 12.0);
    /// assert!((summary.average_margin_percent - 30.0).abs() < 1e-9);
    /// ```
    pub fn of(materials: &[Material]) -> Self {
        let total_cost: f64 = materials.iter().map(|m| m.cost_price).sum();
        let total_sale: f64 = materials.iter().map(|m| m.sales_price).sum();
        let projected_profit = total_sale - total_cost;

        CatalogSummary {
            item_count: materials.len(),
            total_cost,
            total_sale,
            projected_profit,
            average_margin_percent: if total_cost > 0.0 {
                projected_profit / total_cost * 100.0
            } else {
                0.0
            },
        }
    }
}

impl AsRef<[Material]> for MaterialCatalog {
    fn as_ref(&self) -> &[Material] {
        &self.materials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_price() {
        let m = Material::with_markup("1", "c", "Tinta Acrílica 18L", "lata", 100.0, 30.0);
        assert_eq!(m.sales_price, 130.0);
        assert!((m.profit_margin_percent() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_markup_rounds_to_cents() {
        assert_eq!(sale_price_with_bdi(10.0, 33.333), 13.33);
        assert_eq!(sale_price_with_bdi(0.0, 30.0), 0.0);
    }

    #[test]
    fn test_profit_margin_zero_cost() {
        let m = Material::new("1", "c", "Brinde", "un", 0.0, 5.0);
        assert_eq!(m.profit_margin_percent(), 0.0);
    }

    #[test]
    fn test_sorted_by_name_is_stable() {
        let mut catalog = MaterialCatalog::new("c");
        catalog.push(Material::new("1", "c", "Tijolo", "un", 0.5, 0.8));
        catalog.push(Material::new("2", "c", "Argamassa", "kg", 1.0, 1.5));
        catalog.push(Material::new("3", "c", "Tijolo", "un", 0.6, 0.9));

        let sorted = catalog.sorted_by_name();
        let ids: Vec<_> = sorted.materials.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
        // source catalog untouched
        assert_eq!(catalog.materials[0].id, "1");
    }

    #[test]
    fn test_catalog_summary() {
        let mut catalog = MaterialCatalog::new("c");
        catalog.push(Material::with_markup("1", "c", "Tinta 18L", "lata", 100.0, 30.0));
        catalog.push(Material::new("2", "c", "Cimento", "saco", 30.0, 39.0));
        catalog.push(Material::new("3", "c", "Brinde", "un", 0.0, 5.0));

        let summary = catalog.summary();
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total_cost, 130.0);
        assert_eq!(summary.total_sale, 174.0);
        assert_eq!(summary.projected_profit, 44.0);
        assert!((summary.average_margin_percent - 44.0 / 130.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_summary_empty_and_zero_cost() {
        let empty = MaterialCatalog::new("c").summary();
        assert_eq!(
            empty,
            CatalogSummary {
                item_count: 0,
                total_cost: 0.0,
                total_sale: 0.0,
                projected_profit: 0.0,
                average_margin_percent: 0.0,
            }
        );

        let giveaways = CatalogSummary::of(&[Material::new("1", "c", "Brinde", "un", 0.0, 5.0)]);
        assert_eq!(giveaways.projected_profit, 5.0);
        assert_eq!(giveaways.average_margin_percent, 0.0);
    }

    #[test]
    fn test_material_json_omits_missing_category() {
        let m = Material::new("1", "c", "Piso", "m²", 40.0, 52.0);
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("category"));

        let parsed: Material = serde_json::from_str(
            r#"{"id":"9","company_id":"c","name":"Rejunte","unit":"kg","cost_price":3.0,"sales_price":4.5}"#,
        )
        .unwrap();
        assert_eq!(parsed.consumption, 0.0);
        assert_eq!(parsed.category, None);
    }
}
