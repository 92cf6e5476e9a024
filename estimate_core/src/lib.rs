//! # estimate_core - Construction Material Estimation Engine
//!
//! `estimate_core` is the computational heart of Orcaobra: it turns a few site
//! measurements (width, height, optional depth, safety margin) into a list of
//! materials with quantities, and prices that list against a company's
//! material catalog. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize
//! - **Forgiving**: Bad form input degrades to zero with a warning, never an error
//! - **Configurable**: Every consumption rate lives in [`constants`]
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::{estimate_raw, EstimationConstants, Material, RawInput};
//!
//! let catalog = vec![Material::new("1", "acme", "Tijolo Baiano", "milheiro", 600.0, 800.0)];
//! let input = RawInput::new("5", "2,5").with_margin("10");
//!
//! let result = estimate_raw("alvenaria", &input, &catalog, &EstimationConstants::default());
//! assert_eq!(result.reference_measurement, "12.50 m²");
//! assert!(result.total_estimated_cost.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`estimate`] - Engine entry points and result types
//! - [`calculators`] - Calculator registry and formulas
//! - [`materials`] - Material catalog and price lookup
//! - [`input`] - Lenient form input parsing
//! - [`constants`] - Consumption rates and module sizes
//! - [`report`] - Plain-text material list
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Catalog and constants files

pub mod calculators;
pub mod constants;
pub mod errors;
pub mod estimate;
pub mod file_io;
pub mod input;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculators::{CalculatorId, Niche};
pub use constants::EstimationConstants;
pub use errors::{EstimateError, EstimateResult};
pub use estimate::{estimate, estimate_raw, estimate_with, EstimationResult, MaterialLine, Quantity};
pub use file_io::{load_catalog, load_constants, save_catalog};
pub use input::{EstimationInput, RawInput};
pub use materials::{resolve_price, CatalogSummary, Material, MaterialCatalog};
