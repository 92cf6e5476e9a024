//! Cross-module behavior of the estimation engine: raw form input in,
//! priced material list out.

use estimate_core::calculators::stairs::{layout, ramp_slope, RampStatus};
use estimate_core::estimate::Quantity;
use estimate_core::file_io::{load_catalog, save_catalog};
use estimate_core::{
    estimate, estimate_raw, resolve_price, CalculatorId, EstimationConstants, EstimationInput,
    Material, MaterialCatalog, RawInput,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn catalog() -> Vec<Material> {
    vec![
        Material::new("1", "acme", "CHAPA ST 1.20x2.40", "un", 30.0, 42.5),
        Material::new("2", "acme", "Montante 48mm 3m", "barra", 14.0, 19.9),
        Material::new("3", "acme", "Tijolo Baiano 9 furos", "milheiro", 650.0, 890.0),
        Material::new("4", "acme", "Cimento CP-II 50kg", "saco", 29.0, 36.0),
        Material::new("5", "acme", "Piso Porcelanato 60x60", "m²", 45.0, 69.9),
        Material::new("6", "acme", "Argamassa AC-II 20kg", "saco", 18.0, 24.0),
        Material::new("7", "acme", "Tinta Acrílica Fosca", "L", 20.0, 27.0),
        Material::new("8", "acme", "Placa de Gesso 60x60", "un", 5.0, 7.5),
    ]
}

fn ceiling_amounts(result: &estimate_core::EstimationResult) -> Vec<f64> {
    result
        .items
        .iter()
        .filter(|line| !matches!(line.quantity, Quantity::Status { .. }))
        .map(|line| line.quantity.amount())
        .collect()
}

#[test]
fn drywall_wall_reference_scenario() {
    let raw = RawInput::new("4", "2.7").with_margin("10");
    let result = estimate_raw("drywall-parede", &raw, &catalog(), &EstimationConstants::default());

    assert_eq!(result.reference_measurement, "10.80 m²");
    assert_eq!(result.item("Chapas Drywall").unwrap().quantity, Quantity::count(5));
    assert_eq!(result.item("Montantes").unwrap().quantity, Quantity::count(20));
    let total = result.total_estimated_cost.unwrap();
    assert!((total - (5.0 * 42.5 + 20.0 * 19.9)).abs() < 1e-9);
}

#[test]
fn identical_calls_give_identical_results() {
    let constants = EstimationConstants::default();
    let raw = RawInput::new("3,35", "2.60").with_margin("12");
    for id in CalculatorId::ALL {
        let first = estimate_raw(id.id(), &raw, &catalog(), &constants);
        let second = estimate_raw(id.id(), &raw, &catalog(), &constants);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn quantities_never_decrease_with_margin() {
    let materials = catalog();
    for id in CalculatorId::ALL {
        let mut previous: Option<Vec<f64>> = None;
        for margin in [0.0, 5.0, 10.0, 15.0, 20.0] {
            let input = EstimationInput::new(6.3, 2.85).with_depth(0.06).with_margin(margin);
            let amounts = ceiling_amounts(&estimate(id.id(), &input, &materials));
            if let Some(prev) = &previous {
                for (before, after) in prev.iter().zip(&amounts) {
                    assert!(after >= before, "{id}: {after} < {before} at margin {margin}");
                }
            }
            previous = Some(amounts);
        }
    }
}

#[test]
fn every_calculator_handles_blank_input() {
    let constants = EstimationConstants::default();
    for id in CalculatorId::ALL {
        let result = estimate_raw(id.id(), &RawInput::new("", ""), &[], &constants);
        assert_eq!(result.calculator, Some(id));
        assert!(!result.items.is_empty());
        assert_eq!(result.total_estimated_cost, None);
    }

    // an untouched ramp form has no run to judge
    let ramp = estimate_raw("rampa", &RawInput::new("", ""), &[], &constants);
    assert_eq!(ramp.items[0].quantity, Quantity::status("Muito Íngreme"));
    assert_eq!(ramp.reference_measurement, "Inclinação: indefinida");
}

#[test]
fn stairs_and_ramp_scenarios() {
    let c = EstimationConstants::default();

    let flight = layout(2.70, &c.stairs);
    assert_eq!(flight.step_count, 15);
    assert!((flight.riser_height_m - 0.18).abs() < 1e-3);
    assert!((flight.total_run_m - 3.92).abs() < 1e-9);

    let result = estimate_raw("stairs", &RawInput::new("", "2,70"), &[], &c);
    assert_eq!(result.reference_measurement, "2.7m Altura");
    assert_eq!(result.items[0].quantity, Quantity::count(15));

    assert_eq!(ramp_slope(1.0, 10.0, &c.ramp).status, RampStatus::TooSteep);
    assert_eq!(ramp_slope(0.8, 10.0, &c.ramp).status, RampStatus::Accessible);

    let result = estimate("rampa", &EstimationInput::new(10.0, 0.8), &[]);
    assert_eq!(result.reference_measurement, "Inclinação: 8.0%");
    assert_eq!(result.items[0].quantity, Quantity::status("Acessível (NBR 9050)"));
}

#[test]
fn unknown_calculator_is_empty_not_an_error() {
    let result = estimate("impermeabilizacao", &EstimationInput::new(4.0, 3.0), &catalog());
    assert!(result.items.is_empty());
    assert_eq!(result.total_estimated_cost, None);
    assert_eq!(result.reference_measurement, "");
}

#[test]
fn price_lookup_is_case_insensitive_first_match() {
    let materials = catalog();
    assert_eq!(resolve_price(&materials, "chapa"), 42.5);
    assert_eq!(resolve_price(&materials, "GESSO"), 7.5);
    assert_eq!(resolve_price(&materials, "impermeabilizante"), 0.0);
    assert_eq!(resolve_price(&[], "chapa"), 0.0);
}

#[test]
fn lenient_input_is_reported_not_rejected() {
    let raw = RawInput::new("4m", "2,70").with_margin("35");
    let result = estimate_raw("drywall-wall", &raw, &[], &EstimationConstants::default());

    assert_eq!(result.reference_measurement, "10.80 m²");
    // 10.8 / 2.88 * 1.2 = 4.5 -> 5
    assert_eq!(result.items[0].quantity, Quantity::count(5));
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn catalog_file_feeds_the_engine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("acme.json");

    let mut catalog_in = MaterialCatalog::new("acme");
    for material in catalog() {
        catalog_in.push(material);
    }
    save_catalog(&catalog_in, &path).unwrap();
    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded.summary(), catalog_in.summary());
    assert_eq!(loaded.summary().item_count, 8);

    let input = EstimationInput::new(4.0, 5.0).with_margin(10.0);
    let from_file = estimate("piso-revestimento", &input, &loaded.materials);
    let in_memory = estimate("piso-revestimento", &input, &catalog());
    assert_eq!(from_file, in_memory);

    // 22 m² of tile + 80 kg of mortar
    let total = from_file.total_estimated_cost.unwrap();
    assert!((total - (22.0 * 69.9 + 80.0 * 24.0)).abs() < 1e-6);
}
