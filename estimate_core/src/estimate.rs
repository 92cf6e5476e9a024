//! # Estimation Engine
//!
//! Runs a calculator formula, attaches catalog prices to the priced lines,
//! and totals the estimated sale cost.
//!
//! The engine never fails:
//! - unknown calculator identifiers produce an empty result with no cost
//! - unreadable or out-of-range inputs are replaced (see [`crate::input`])
//!   and reported in [`EstimationResult::warnings`]
//! - lines whose keyword matches no catalog entry are priced at zero
//!
//! A calculation is a pure function of its arguments: no I/O, no caches, no
//! shared state.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::estimate::estimate;
//! use estimate_core::input::EstimationInput;
//! use estimate_core::materials::Material;
//!
//! let catalog = vec![
//!     Material::new("1", "acme", "Chapa ST 1.20x2.40", "un", 30.0, 40.0),
//!     Material::new("2", "acme", "Montante 48mm", "barra", 15.0, 20.0),
//! ];
//! let input = EstimationInput::new(4.0, 2.7).with_margin(10.0);
//!
//! let result = estimate("drywall-wall", &input, &catalog);
//! assert_eq!(result.reference_measurement, "10.80 m²");
//! assert_eq!(result.items[0].quantity.amount(), 5.0);   // sheets
//! assert_eq!(result.items[1].quantity.amount(), 20.0);  // studs
//! assert_eq!(result.total_estimated_cost, Some(5.0 * 40.0 + 20.0 * 20.0));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculators::CalculatorId;
use crate::constants::EstimationConstants;
use crate::input::{EstimationInput, InputField, InputWarning, ParsedInput, RawInput, WarningKind};
use crate::materials::{resolve_price, Material};
use crate::units::{round_to, Unit};

// ============================================================================
// Line Items
// ============================================================================

/// How much of a material is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Quantity {
    /// Whole purchasable pieces (sheets, bricks, bars); the unit is in the note
    Count { value: u64 },
    /// Measured amount with its unit, reported to a fixed precision
    Measure { value: f64, unit: Unit, decimals: u32 },
    /// Non-numeric verdict (ramp accessibility)
    Status { label: String },
}

impl Quantity {
    pub fn count(value: u64) -> Self {
        Quantity::Count { value }
    }

    /// Measured amount, stored already rounded to `decimals` places.
    pub fn measure(value: f64, unit: Unit, decimals: u32) -> Self {
        Quantity::Measure {
            value: round_to(value, decimals),
            unit,
            decimals,
        }
    }

    /// Whole number of a measured unit ("12 m²", "3 sc")
    pub fn whole(value: u64, unit: Unit) -> Self {
        Quantity::Measure {
            value: value as f64,
            unit,
            decimals: 0,
        }
    }

    pub fn status(label: impl Into<String>) -> Self {
        Quantity::Status {
            label: label.into(),
        }
    }

    /// Numeric amount used for pricing; statuses count as zero.
    pub fn amount(&self) -> f64 {
        match self {
            Quantity::Count { value } => *value as f64,
            Quantity::Measure { value, .. } => *value,
            Quantity::Status { .. } => 0.0,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count { value } => write!(f, "{}", value),
            Quantity::Measure {
                value,
                unit,
                decimals,
            } => write!(f, "{:.*} {}", *decimals as usize, value, unit),
            Quantity::Status { label } => f.write_str(label),
        }
    }
}

/// Catalog pricing attached to a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePricing {
    /// Lowercase keyword matched against catalog names
    pub keyword: String,
    /// Quantity covered by one catalog price (1, or 1000 for bricks)
    pub batch_size: f64,
    /// Resolved sale price, 0 when no catalog entry matched
    pub unit_price: f64,
    /// quantity / batch_size x unit_price
    pub cost: f64,
}

/// One material on the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub name: String,
    pub quantity: Quantity,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<LinePricing>,
}

impl MaterialLine {
    pub fn new(name: impl Into<String>, quantity: Quantity, note: impl Into<String>) -> Self {
        MaterialLine {
            name: name.into(),
            quantity,
            note: note.into(),
            pricing: None,
        }
    }

    /// Price this line by the catalog entry matching `keyword`.
    pub fn priced(self, keyword: &str) -> Self {
        self.priced_per(keyword, 1.0)
    }

    /// Price this line where one catalog price covers `batch_size` units.
    pub fn priced_per(mut self, keyword: &str, batch_size: f64) -> Self {
        self.pricing = Some(LinePricing {
            keyword: keyword.to_lowercase(),
            batch_size,
            unit_price: 0.0,
            cost: 0.0,
        });
        self
    }

    /// Cost contribution of this line (0 when unpriced)
    pub fn cost(&self) -> f64 {
        self.pricing.as_ref().map_or(0.0, |p| p.cost)
    }

    fn resolve(&mut self, materials: &[Material]) -> f64 {
        let amount = self.quantity.amount();
        match self.pricing.as_mut() {
            Some(pricing) => {
                pricing.unit_price = resolve_price(materials, &pricing.keyword);
                pricing.cost = amount / pricing.batch_size * pricing.unit_price;
                pricing.cost
            }
            None => 0.0,
        }
    }
}

// ============================================================================
// Result
// ============================================================================

/// Output of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Calculator that ran; `None` when the identifier was unknown
    pub calculator: Option<CalculatorId>,
    pub items: Vec<MaterialLine>,
    /// Sum of priced line costs; `None` when the sum is exactly zero
    pub total_estimated_cost: Option<f64>,
    pub reference_measurement: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<InputWarning>,
}

impl EstimationResult {
    /// Result for an unknown calculator
    pub fn empty() -> Self {
        EstimationResult {
            calculator: None,
            items: Vec::new(),
            total_estimated_cost: None,
            reference_measurement: String::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First line with the given name
    pub fn item(&self, name: &str) -> Option<&MaterialLine> {
        self.items.iter().find(|line| line.name == name)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Run a calculator with the default constants.
pub fn estimate(
    calculator: &str,
    input: &EstimationInput,
    materials: &[Material],
) -> EstimationResult {
    estimate_with(calculator, input, materials, &EstimationConstants::default())
}

/// Run a calculator with explicit constants.
pub fn estimate_with(
    calculator: &str,
    input: &EstimationInput,
    materials: &[Material],
    constants: &EstimationConstants,
) -> EstimationResult {
    match lookup(calculator) {
        Some(id) => run(id, input.sanitized(&constants.input), materials, constants),
        None => EstimationResult::empty(),
    }
}

/// Run a calculator straight from form strings.
pub fn estimate_raw(
    calculator: &str,
    raw: &RawInput,
    materials: &[Material],
    constants: &EstimationConstants,
) -> EstimationResult {
    match lookup(calculator) {
        Some(id) => {
            let parsed = EstimationInput::from_raw_with(raw, &constants.input);
            run(id, parsed, materials, constants)
        }
        None => EstimationResult::empty(),
    }
}

fn lookup(calculator: &str) -> Option<CalculatorId> {
    let id = CalculatorId::lookup(calculator);
    if id.is_none() {
        warn!(calculator, "unknown calculator, returning empty estimate");
    }
    id
}

fn run(
    id: CalculatorId,
    parsed: ParsedInput,
    materials: &[Material],
    constants: &EstimationConstants,
) -> EstimationResult {
    let definition = id.definition();
    let warnings: Vec<InputWarning> = parsed
        .warnings
        .into_iter()
        .filter(|w| definition.labels.shows(w.field))
        .filter(|w| {
            !(w.field == InputField::Width
                && w.kind == WarningKind::Missing
                && definition.labels.width_optional)
        })
        .collect();
    for w in &warnings {
        warn!(calculator = id.id(), "input corrected: {}", w);
    }

    let formula = id.formula();
    let takeoff = formula(&parsed.input, constants);

    let mut items = takeoff.lines;
    let total: f64 = items.iter_mut().map(|line| line.resolve(materials)).sum();

    debug!(
        calculator = id.id(),
        items = items.len(),
        total,
        "estimate computed"
    );

    EstimationResult {
        calculator: Some(id),
        items,
        total_estimated_cost: if total == 0.0 { None } else { Some(total) },
        reference_measurement: takeoff.reference_measurement,
        warnings,
    }
}
