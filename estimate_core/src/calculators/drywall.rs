//! # Drywall and Plaster Ceilings
//!
//! - **Wall**: 1.20 x 2.40 sheets, studs every 0.60 m, floor and ceiling tracks
//! - **Ceiling**: sheets, F530 profile, hanger rods
//! - **Conventional ceiling**: cast 60 x 60 plaster tiles hung with sisal and plaster glue
//!
//! Sheets, studs and tiles absorb the safety margin; tracks, profiles and
//! hangers do not.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculators::drywall::wall_quantities;
//! use estimate_core::constants::DrywallConstants;
//! use estimate_core::input::EstimationInput;
//!
//! let input = EstimationInput::new(4.0, 2.7).with_margin(10.0);
//! let q = wall_quantities(&input, &DrywallConstants::default());
//! assert_eq!((q.sheets, q.studs, q.tracks), (5, 20, 3));
//! ```

use serde::{Deserialize, Serialize};

use super::{area_label, Takeoff};
use crate::constants::{DrywallConstants, EstimationConstants};
use crate::estimate::{MaterialLine, Quantity};
use crate::input::EstimationInput;
use crate::units::{ceil_units, Unit};

/// Piece counts for a drywall partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallQuantities {
    pub sheets: u64,
    pub studs: u64,
    pub tracks: u64,
}

/// Sheets, studs and tracks for a wall of `width` x `height`.
pub fn wall_quantities(input: &EstimationInput, c: &DrywallConstants) -> WallQuantities {
    let area = input.area().value();
    let safety = input.safety_factor();

    WallQuantities {
        sheets: ceil_units((area / c.sheet_area_m2) * safety),
        studs: ceil_units((input.width / c.stud_spacing_m) * input.height * safety),
        // one track run on the floor and one on the ceiling
        tracks: ceil_units(input.width * 2.0 / c.track_length_m),
    }
}

/// Drywall partition wall.
pub fn wall(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let q = wall_quantities(input, &constants.drywall);

    Takeoff {
        lines: vec![
            MaterialLine::new("Chapas Drywall", Quantity::count(q.sheets), "ST 1.20x2.40")
                .priced("chapa"),
            MaterialLine::new("Montantes", Quantity::count(q.studs), "Perfil estrutural")
                .priced("montante"),
            MaterialLine::new("Guias", Quantity::count(q.tracks), "Piso/Teto"),
        ],
        reference_measurement: area_label(input),
    }
}

/// Suspended drywall ceiling.
pub fn ceiling(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.drywall;
    let area = input.area().value();
    let sheets = ceil_units((area / c.sheet_area_m2) * input.safety_factor());

    Takeoff {
        lines: vec![
            MaterialLine::new("Chapas Drywall", Quantity::count(sheets), "Teto").priced("chapa"),
            MaterialLine::new(
                "Perfil F530",
                Quantity::count(ceil_units(area * c.ceiling_profile_m_per_m2)),
                "Metros lineares",
            ),
            MaterialLine::new(
                "Tirantes",
                Quantity::count(ceil_units(area / c.hanger_area_m2)),
                "Unidades",
            ),
        ],
        reference_measurement: area_label(input),
    }
}

/// Conventional cast-plaster tile ceiling.
pub fn conventional_ceiling(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.ceiling;
    let area = input.area().value();
    let tiles = ceil_units((area / c.tile_area_m2) * input.safety_factor());

    Takeoff {
        lines: vec![
            MaterialLine::new("Placas 60x60", Quantity::count(tiles), "Gesso fundido")
                .priced("placa"),
            MaterialLine::new(
                "Sisal",
                Quantity::measure(area * c.sisal_kg_per_m2, Unit::Kilogram, 1),
                "Amarração",
            ),
            MaterialLine::new(
                "Gesso Cola",
                Quantity::measure(area * c.plaster_glue_kg_per_m2, Unit::Kilogram, 1),
                "Fixação",
            ),
        ],
        reference_measurement: area_label(input),
    }
}
