//! # Stairs and Ramps
//!
//! Geometry checks rather than material takeoffs:
//!
//! - **Stairs**: number of steps for a total rise at a target riser height,
//!   the resulting real riser, and the horizontal run needed
//! - **Ramp**: slope in percent against the NBR 9050 accessibility limit
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculators::stairs::{layout, ramp_slope, RampStatus};
//! use estimate_core::constants::EstimationConstants;
//!
//! let c = EstimationConstants::default();
//!
//! let stair = layout(2.70, &c.stairs);
//! assert_eq!(stair.step_count, 15);
//! assert!((stair.total_run_m - 3.92).abs() < 1e-9);
//!
//! let ramp = ramp_slope(0.8, 10.0, &c.ramp);
//! assert_eq!(ramp.status, RampStatus::Accessible);
//! ```

use serde::{Deserialize, Serialize};

use super::Takeoff;
use crate::constants::{EstimationConstants, RampConstants, StairConstants};
use crate::estimate::{MaterialLine, Quantity};
use crate::input::EstimationInput;
use crate::units::{ceil_units, Unit};

/// Rises within this fraction of a whole number of risers are not rounded
/// up to an extra step (2.70 / 0.18 evaluates to 15.000000000000002).
const STEP_TOLERANCE: f64 = 1e-9;

// ============================================================================
// Stairs
// ============================================================================

/// Layout of a straight flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairLayout {
    pub step_count: u64,
    /// Real riser height: total rise / step count
    pub riser_height_m: f64,
    /// Horizontal length: (steps - 1) treads
    pub total_run_m: f64,
}

/// Lay out a flight for the given total rise.
///
/// A zero rise gives zero steps and zero run.
pub fn layout(total_rise_m: f64, c: &StairConstants) -> StairLayout {
    let step_count = ceil_units(total_rise_m / c.riser_height_m - STEP_TOLERANCE);
    if step_count == 0 {
        return StairLayout {
            step_count: 0,
            riser_height_m: 0.0,
            total_run_m: 0.0,
        };
    }

    StairLayout {
        step_count,
        riser_height_m: total_rise_m / step_count as f64,
        total_run_m: (step_count - 1) as f64 * c.tread_depth_m,
    }
}

/// Stair calculator. Rise comes from `height`; tread width is not used.
pub fn stairs(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let flight = layout(input.height, &constants.stairs);

    Takeoff {
        lines: vec![
            MaterialLine::new(
                "Número de Degraus",
                Quantity::count(flight.step_count),
                format!("Espelho de {:.3}m", flight.riser_height_m),
            ),
            MaterialLine::new(
                "Comprimento Total",
                Quantity::measure(flight.total_run_m, Unit::Meter, 2),
                "Espaço horizontal necessário",
            ),
        ],
        reference_measurement: format!("{}m Altura", input.height),
    }
}

// ============================================================================
// Ramps
// ============================================================================

/// Accessibility verdict for a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampStatus {
    Accessible,
    TooSteep,
}

impl RampStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RampStatus::Accessible => "Acessível (NBR 9050)",
            RampStatus::TooSteep => "Muito Íngreme",
        }
    }
}

/// Slope of a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampSlope {
    /// rise / run x 100; `None` when the run is zero
    pub slope_percent: Option<f64>,
    pub status: RampStatus,
}

/// Slope check. Without a run there is no slope to accept, so a zero run is
/// too steep whatever the rise (a blank form included).
pub fn ramp_slope(rise_m: f64, run_m: f64, c: &RampConstants) -> RampSlope {
    let slope_percent = (run_m > 0.0).then(|| (rise_m / run_m) * 100.0);

    let status = match slope_percent {
        Some(p) if p <= c.max_accessible_slope_percent => RampStatus::Accessible,
        _ => RampStatus::TooSteep,
    };

    RampSlope { slope_percent, status }
}

/// Ramp calculator. Rise comes from `height`, run from `width`.
pub fn ramp(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.ramp;
    let slope = ramp_slope(input.height, input.width, c);

    let reference_measurement = match slope.slope_percent {
        Some(p) => format!("Inclinação: {:.1}%", p),
        None => "Inclinação: indefinida".to_string(),
    };

    Takeoff {
        lines: vec![MaterialLine::new(
            "Status",
            Quantity::status(slope.status.label()),
            format!("Ideal máx {}%", c.max_accessible_slope_percent),
        )],
        reference_measurement,
    }
}
