//! # Finishing
//!
//! Floor tiling, wall painting and baseboards.

use super::{area_label, Takeoff};
use crate::constants::EstimationConstants;
use crate::estimate::{MaterialLine, Quantity};
use crate::input::EstimationInput;
use crate::units::{ceil_units, Unit};

/// Floor or wall tiles with adhesive mortar and grout.
///
/// Tiles absorb the safety margin; mortar and grout are per net area.
pub fn flooring(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.flooring;
    let area = input.area().value();

    Takeoff {
        lines: vec![
            MaterialLine::new(
                "Piso/Revestimento",
                Quantity::whole(ceil_units(area * input.safety_factor()), Unit::SquareMeter),
                format!("Inclui {}% perda", input.margin_percent),
            )
            .priced("piso"),
            MaterialLine::new(
                "Argamassa",
                Quantity::whole(ceil_units(area * c.mortar_kg_per_m2), Unit::Kilogram),
                format!("{}kg/m² médio", c.mortar_kg_per_m2),
            )
            .priced("argamassa"),
            MaterialLine::new(
                "Rejunte",
                Quantity::whole(ceil_units(area * c.grout_kg_per_m2), Unit::Kilogram),
                format!("Aprox. {:.0}g/m²", c.grout_kg_per_m2 * 1000.0),
            ),
        ],
        reference_measurement: area_label(input),
    }
}

/// Wall paint and sealer.
pub fn paint(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.paint;
    let area = input.area().value();

    Takeoff {
        lines: vec![
            MaterialLine::new(
                "Tinta",
                Quantity::whole(ceil_units(area * c.coats / c.paint_yield_m2_per_l), Unit::Liter),
                format!("Considerando {} demãos", c.coats),
            )
            .priced("tinta"),
            MaterialLine::new(
                "Selador",
                Quantity::whole(ceil_units(area / c.sealer_yield_m2_per_l), Unit::Liter),
                "Preparação",
            ),
        ],
        reference_measurement: area_label(input),
    }
}

/// Baseboard bars along a run of `width` meters.
pub fn baseboard(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.linear;

    Takeoff {
        lines: vec![
            MaterialLine::new(
                "Peças Rodapé",
                Quantity::count(ceil_units(input.width / c.baseboard_bar_length_m)),
                format!("Considerando barras de {}m", c.baseboard_bar_length_m),
            ),
            MaterialLine::new("Cola/Prego", Quantity::whole(1, Unit::Piece), "Kit fixação"),
        ],
        reference_measurement: format!("{} metros lineares", input.width),
    }
}
