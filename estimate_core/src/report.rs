//! Plain-text material list, ready to paste into a message or a purchase order.
//!
//! ```text
//! Parede Drywall
//! Referência: 10.80 m²
//! Est. R$ 600.00
//! - Chapas Drywall: 5 (ST 1.20x2.40)
//! - Montantes: 20 (Perfil estrutural)
//! - Guias: 3 (Piso/Teto)
//! ```

use std::fmt::Write;

use crate::estimate::EstimationResult;

/// Render a result as a copyable list. An empty result renders as an empty string.
pub fn material_list(result: &EstimationResult) -> String {
    if result.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    if let Some(id) = result.calculator {
        let _ = writeln!(out, "{}", id.definition().title);
    }
    let _ = writeln!(out, "Referência: {}", result.reference_measurement);
    if let Some(total) = result.total_estimated_cost {
        let _ = writeln!(out, "Est. R$ {:.2}", total);
    }
    for line in &result.items {
        let _ = writeln!(out, "- {}: {} ({})", line.name, line.quantity, line.note);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::estimate;
    use crate::input::EstimationInput;
    use crate::materials::Material;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_with_total() {
        let catalog = vec![
            Material::new("1", "c", "Chapa ST", "un", 30.0, 40.0),
            Material::new("2", "c", "Montante 48", "barra", 15.0, 20.0),
        ];
        let input = EstimationInput::new(4.0, 2.7).with_margin(10.0);
        let result = estimate("drywall-wall", &input, &catalog);
        let title = result.calculator.unwrap().definition().title;

        let expected = format!(
            "{title}\n\
             Referência: 10.80 m²\n\
             Est. R$ 600.00\n\
             - Chapas Drywall: 5 (ST 1.20x2.40)\n\
             - Montantes: 20 (Perfil estrutural)\n\
             - Guias: 3 (Piso/Teto)\n"
        );
        assert_eq!(material_list(&result), expected);
    }

    #[test]
    fn test_list_without_prices_has_no_total_line() {
        let result = estimate("plumbing", &EstimationInput::new(12.0, 0.0), &[]);
        let text = material_list(&result);
        assert!(!text.contains("Est. R$"));
        assert!(text.contains("Referência: 12 metros\n"));
        assert!(text.ends_with("- Lixa/Adesivo: 1 un (Kit consumo)\n"));
    }

    #[test]
    fn test_unknown_calculator_renders_nothing() {
        let result = estimate("nope", &EstimationInput::new(1.0, 1.0), &[]);
        assert_eq!(material_list(&result), "");
    }
}
