//! PVC pipe runs, sold in fixed-length bars.

use super::Takeoff;
use crate::constants::EstimationConstants;
use crate::estimate::{MaterialLine, Quantity};
use crate::input::EstimationInput;
use crate::units::{ceil_units, Unit};

/// Pipe bars for a run of `width` meters, plus one consumables kit.
pub fn piping(input: &EstimationInput, constants: &EstimationConstants) -> Takeoff {
    let bar = constants.linear.pipe_bar_length_m;

    Takeoff {
        lines: vec![
            MaterialLine::new(
                "Tubos PVC",
                Quantity::count(ceil_units(input.width / bar)),
                format!("Barras de {}m", bar),
            ),
            MaterialLine::new("Lixa/Adesivo", Quantity::whole(1, Unit::Piece), "Kit consumo"),
        ],
        reference_measurement: format!("{} metros", input.width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piping() {
        let c = EstimationConstants::default();

        let takeoff = piping(&EstimationInput::new(12.0, 0.0), &c);
        assert_eq!(takeoff.reference_measurement, "12 metros");
        assert_eq!(takeoff.lines[0].quantity, Quantity::count(2));
        assert_eq!(takeoff.lines[0].note, "Barras de 6m");

        let takeoff = piping(&EstimationInput::new(12.5, 0.0), &c);
        assert_eq!(takeoff.lines[0].quantity, Quantity::count(3));
        assert_eq!(takeoff.reference_measurement, "12.5 metros");
    }

    #[test]
    fn test_piping_zero_length_still_lists_kit() {
        let takeoff = piping(&EstimationInput::new(0.0, 0.0), &EstimationConstants::default());
        assert_eq!(takeoff.lines[0].quantity, Quantity::count(0));
        assert_eq!(takeoff.lines[1].quantity, Quantity::whole(1, Unit::Piece));
    }
}
