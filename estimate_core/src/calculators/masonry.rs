//! # Masonry and Concrete
//!
//! - **Masonry**: bricks per square meter of wall and cement bags for the mortar
//! - **Subfloor**: screed volume split into sand and cement
//! - **Ribbed slab**: joists, filler blocks and the concrete topping
//!
//! Bricks are sold by the thousand, so their catalog price is applied per
//! [`MasonryConstants::brick_price_batch`](crate::constants::MasonryConstants) units.

use super::{area_label, Takeoff};
use crate::constants::EstimationConstants;
use crate::estimate::{MaterialLine, Quantity};
use crate::input::EstimationInput;
use crate::units::{ceil_units, Meters, Unit};

/// Brick or block wall.
pub fn masonry(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.masonry;
    let area = input.area().value();

    let bricks = ceil_units(area * c.bricks_per_m2 * input.safety_factor());
    let cement_bags = ceil_units(area * c.cement_bags_per_m2);

    Takeoff {
        lines: vec![
            MaterialLine::new("Tijolos/Blocos", Quantity::count(bricks), "Baiano ou concreto")
                .priced_per("tijolo", c.brick_price_batch),
            MaterialLine::new("Cimento", Quantity::count(cement_bags), "Sacos 50kg")
                .priced("cimento"),
        ],
        reference_measurement: area_label(input),
    }
}

/// Sand/cement screed. Depth defaults to the standard thickness when blank or zero.
pub fn subfloor(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.screed;
    let area = input.area().value();
    let volume = input.volume_or(Meters(c.default_thickness_m)).value();

    Takeoff {
        lines: vec![
            MaterialLine::new(
                "Areia Média",
                Quantity::measure(volume * c.sand_m3_per_m3, Unit::CubicMeter, 2),
                "Traço base",
            ),
            MaterialLine::new(
                "Cimento",
                Quantity::whole(ceil_units(volume * c.cement_bags_per_m3), Unit::Bag),
                "Sacos 50kg",
            ),
        ],
        reference_measurement: format!("{:.2} m² (Vol: {:.2} m³)", area, volume),
    }
}

/// Precast joist slab with filler blocks.
pub fn ribbed_slab(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let c = &constants.slab;
    let area = input.area().value();

    Takeoff {
        lines: vec![
            MaterialLine::new(
                "Vigotas Trilho",
                Quantity::count(ceil_units(input.width * c.joist_m_per_m_width)),
                "Metros lineares aprox",
            ),
            MaterialLine::new(
                "Isopor/Lajota",
                Quantity::count(ceil_units(area * c.filler_blocks_per_m2)),
                "Peças",
            ),
            MaterialLine::new(
                "Concreto Usinado",
                Quantity::measure(area * c.topping_thickness_m, Unit::CubicMeter, 1),
                format!("Capa {:.0}cm", c.topping_thickness_m * 100.0),
            ),
        ],
        reference_measurement: area_label(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> EstimationConstants {
        EstimationConstants::default()
    }

    #[test]
    fn test_masonry() {
        // 5 x 2 = 10 m²: 10 * 25 * 1.1 = 275 bricks, ceil(3.0) bags
        let takeoff = masonry(&EstimationInput::new(5.0, 2.0).with_margin(10.0), &constants());
        assert_eq!(takeoff.lines[0].quantity, Quantity::count(275));
        assert_eq!(takeoff.lines[1].quantity, Quantity::count(3));

        let brick_pricing = takeoff.lines[0].pricing.as_ref().unwrap();
        assert_eq!(brick_pricing.keyword, "tijolo");
        assert_eq!(brick_pricing.batch_size, 1000.0);
    }

    #[test]
    fn test_masonry_cement_ignores_margin() {
        let low = masonry(&EstimationInput::new(3.5, 2.8).with_margin(0.0), &constants());
        let high = masonry(&EstimationInput::new(3.5, 2.8).with_margin(20.0), &constants());
        assert_eq!(low.lines[1].quantity, high.lines[1].quantity);
        assert_eq!(low.lines[1].quantity, Quantity::count(3));
    }

    #[test]
    fn test_subfloor_default_thickness() {
        let takeoff = subfloor(&EstimationInput::new(5.0, 4.0), &constants());
        assert_eq!(takeoff.reference_measurement, "20.00 m² (Vol: 1.00 m³)");
        assert_eq!(takeoff.lines[0].quantity.to_string(), "0.70 m³");
        assert_eq!(takeoff.lines[1].quantity.to_string(), "7 sc");
    }

    #[test]
    fn test_subfloor_explicit_thickness() {
        let takeoff = subfloor(&EstimationInput::new(5.0, 4.0).with_depth(0.08), &constants());
        assert_eq!(takeoff.reference_measurement, "20.00 m² (Vol: 1.60 m³)");
        assert_eq!(takeoff.lines[0].quantity.to_string(), "1.12 m³");
        // 1.6 * 7 = 11.2 -> 12 bags
        assert_eq!(takeoff.lines[1].quantity, Quantity::whole(12, Unit::Bag));
    }

    #[test]
    fn test_ribbed_slab() {
        let takeoff = ribbed_slab(&EstimationInput::new(4.0, 5.0), &constants());
        assert_eq!(takeoff.lines[0].quantity, Quantity::count(8));
        assert_eq!(takeoff.lines[1].quantity, Quantity::count(70));
        assert_eq!(takeoff.lines[2].quantity.to_string(), "1.6 m³");
        assert_eq!(takeoff.lines[2].note, "Capa 8cm");
        assert!(takeoff.lines.iter().all(|line| line.pricing.is_none()));
    }
}
