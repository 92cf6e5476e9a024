//! # Calculators
//!
//! Each calculator turns a handful of site measurements into a list of
//! material lines. Calculators follow the pattern:
//!
//! - a [`CalculatorId`] variant (tagged dispatch, no trait objects)
//! - a static [`CalculatorDefinition`] (title, niches, input labels, guidance)
//! - a pure formula `fn(&EstimationInput, &EstimationConstants) -> Takeoff`
//!
//! Formulas never see the material catalog; prices are attached afterwards
//! by [`crate::estimate`].
//!
//! ## Available Calculators
//!
//! - [`drywall`] - drywall wall, drywall ceiling, conventional plaster ceiling
//! - [`masonry`] - brick masonry, subfloor screed, ribbed slab
//! - [`stairs`] - stair layout and ramp slope
//! - [`finishing`] - tiling, paint, baseboard
//! - [`plumbing`] - PVC piping
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculators::{available_for, CalculatorId, Niche};
//!
//! let id: CalculatorId = "drywall-wall".parse().unwrap();
//! assert_eq!(id, CalculatorId::DrywallWall);
//! assert_eq!(id.id(), "drywall-parede");
//!
//! let painting = available_for(Niche::Pintura);
//! assert!(painting.iter().any(|def| def.id == CalculatorId::Paint));
//! ```

pub mod drywall;
pub mod finishing;
pub mod guidance;
pub mod masonry;
pub mod plumbing;
pub mod stairs;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::errors::{EstimateError, EstimateResult};
use crate::estimate::MaterialLine;
use crate::input::{EstimationInput, InputField};

pub use guidance::{Faq, Guidance};

// ============================================================================
// Identifiers
// ============================================================================

/// Every calculator the engine knows, in display order.
///
/// Serializes as the short Portuguese identifier used by the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorId {
    #[serde(rename = "drywall-parede")]
    DrywallWall,
    #[serde(rename = "forro-drywall")]
    DrywallCeiling,
    #[serde(rename = "forro-convencional")]
    ConventionalCeiling,
    #[serde(rename = "alvenaria")]
    Masonry,
    #[serde(rename = "escada")]
    Stairs,
    #[serde(rename = "piso-revestimento")]
    Flooring,
    #[serde(rename = "contrapiso")]
    Subfloor,
    #[serde(rename = "laje")]
    RibbedSlab,
    #[serde(rename = "pintura")]
    Paint,
    #[serde(rename = "rampa")]
    Ramp,
    #[serde(rename = "hidraulica-tubos")]
    Plumbing,
    #[serde(rename = "rodape")]
    Baseboard,
}

impl CalculatorId {
    /// All calculators in display order
    pub const ALL: [CalculatorId; 12] = [
        CalculatorId::DrywallWall,
        CalculatorId::DrywallCeiling,
        CalculatorId::ConventionalCeiling,
        CalculatorId::Masonry,
        CalculatorId::Stairs,
        CalculatorId::Flooring,
        CalculatorId::Subfloor,
        CalculatorId::RibbedSlab,
        CalculatorId::Paint,
        CalculatorId::Ramp,
        CalculatorId::Plumbing,
        CalculatorId::Baseboard,
    ];

    /// Canonical identifier
    pub fn id(&self) -> &'static str {
        match self {
            CalculatorId::DrywallWall => "drywall-parede",
            CalculatorId::DrywallCeiling => "forro-drywall",
            CalculatorId::ConventionalCeiling => "forro-convencional",
            CalculatorId::Masonry => "alvenaria",
            CalculatorId::Stairs => "escada",
            CalculatorId::Flooring => "piso-revestimento",
            CalculatorId::Subfloor => "contrapiso",
            CalculatorId::RibbedSlab => "laje",
            CalculatorId::Paint => "pintura",
            CalculatorId::Ramp => "rampa",
            CalculatorId::Plumbing => "hidraulica-tubos",
            CalculatorId::Baseboard => "rodape",
        }
    }

    /// English alias, also accepted by [`CalculatorId::lookup`]
    pub fn alias(&self) -> &'static str {
        match self {
            CalculatorId::DrywallWall => "drywall-wall",
            CalculatorId::DrywallCeiling => "drywall-ceiling",
            CalculatorId::ConventionalCeiling => "conventional-ceiling",
            CalculatorId::Masonry => "masonry",
            CalculatorId::Stairs => "stairs",
            CalculatorId::Flooring => "flooring",
            CalculatorId::Subfloor => "subfloor",
            CalculatorId::RibbedSlab => "ribbed-slab",
            CalculatorId::Paint => "paint",
            CalculatorId::Ramp => "ramp",
            CalculatorId::Plumbing => "plumbing",
            CalculatorId::Baseboard => "baseboard",
        }
    }

    /// Resolve an identifier or alias (trimmed, case-insensitive).
    pub fn lookup(name: &str) -> Option<CalculatorId> {
        let needle = name.trim().to_lowercase();
        CalculatorId::ALL
            .iter()
            .copied()
            .find(|id| id.id() == needle || id.alias() == needle)
    }

    /// Static metadata for this calculator
    pub fn definition(&self) -> &'static CalculatorDefinition {
        definition(*self)
    }

    /// The formula behind this calculator
    pub fn formula(&self) -> Formula {
        match self {
            CalculatorId::DrywallWall => drywall::wall,
            CalculatorId::DrywallCeiling => drywall::ceiling,
            CalculatorId::ConventionalCeiling => drywall::conventional_ceiling,
            CalculatorId::Masonry => masonry::masonry,
            CalculatorId::Stairs => stairs::stairs,
            CalculatorId::Flooring => finishing::flooring,
            CalculatorId::Subfloor => masonry::subfloor,
            CalculatorId::RibbedSlab => masonry::ribbed_slab,
            CalculatorId::Paint => finishing::paint,
            CalculatorId::Ramp => stairs::ramp,
            CalculatorId::Plumbing => plumbing::piping,
            CalculatorId::Baseboard => finishing::baseboard,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CalculatorId {
    type Err = EstimateError;

    fn from_str(s: &str) -> EstimateResult<Self> {
        CalculatorId::lookup(s).ok_or_else(|| EstimateError::unknown_calculator(s))
    }
}

// ============================================================================
// Niches
// ============================================================================

/// A company's declared specialty. Only filters which calculators are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Niche {
    #[serde(rename = "Geral")]
    Geral,
    #[serde(rename = "Gesso e Drywall")]
    GessoDrywall,
    #[serde(rename = "Alvenaria")]
    Alvenaria,
    #[serde(rename = "Pintura")]
    Pintura,
    #[serde(rename = "Elétrica")]
    Eletrica,
    #[serde(rename = "Hidráulica")]
    Hidraulica,
    #[serde(rename = "Engenharia")]
    Engenharia,
    #[serde(rename = "Acabamento")]
    Acabamento,
}

impl Niche {
    pub const ALL: [Niche; 8] = [
        Niche::Geral,
        Niche::GessoDrywall,
        Niche::Alvenaria,
        Niche::Pintura,
        Niche::Eletrica,
        Niche::Hidraulica,
        Niche::Engenharia,
        Niche::Acabamento,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Niche::Geral => "Geral",
            Niche::GessoDrywall => "Gesso e Drywall",
            Niche::Alvenaria => "Alvenaria",
            Niche::Pintura => "Pintura",
            Niche::Eletrica => "Elétrica",
            Niche::Hidraulica => "Hidráulica",
            Niche::Engenharia => "Engenharia",
            Niche::Acabamento => "Acabamento",
        }
    }

    /// Unaccented lowercase spelling, for typing on a terminal
    fn plain_name(&self) -> &'static str {
        match self {
            Niche::Geral => "geral",
            Niche::GessoDrywall => "gesso e drywall",
            Niche::Alvenaria => "alvenaria",
            Niche::Pintura => "pintura",
            Niche::Eletrica => "eletrica",
            Niche::Hidraulica => "hidraulica",
            Niche::Engenharia => "engenharia",
            Niche::Acabamento => "acabamento",
        }
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Niche {
    type Err = EstimateError;

    /// Accepts the display name or its unaccented spelling, any case.
    fn from_str(s: &str) -> EstimateResult<Self> {
        let needle = s.trim().to_lowercase();
        Niche::ALL
            .iter()
            .copied()
            .find(|n| n.name().to_lowercase() == needle || n.plain_name() == needle)
            .ok_or_else(|| EstimateError::unknown_niche(s))
    }
}

// ============================================================================
// Definitions
// ============================================================================

/// Formula signature shared by every calculator.
pub type Formula = fn(&EstimationInput, &EstimationConstants) -> Takeoff;

/// Quantities produced by a formula, before prices are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Takeoff {
    pub lines: Vec<MaterialLine>,
    /// Headline measurement shown above the list ("10.80 m²", "Inclinação: 8.0%")
    pub reference_measurement: String,
}

/// Default headline measurement: the area, "10.80 m²".
pub(crate) fn area_label(input: &EstimationInput) -> String {
    format!("{:.2} m²", input.area().value())
}

/// Form labels for the three dimension fields.
///
/// `None` means the field is hidden for this calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputLabels {
    pub width: &'static str,
    /// The width field may be left blank
    pub width_optional: bool,
    pub height: Option<&'static str>,
    pub depth: Option<&'static str>,
}

impl InputLabels {
    const AREA: InputLabels = InputLabels {
        width: "Largura (m)",
        width_optional: false,
        height: Some("Comprimento / Altura (m)"),
        depth: None,
    };

    const LENGTH_ONLY: InputLabels = InputLabels {
        width: "Comprimento Total (m)",
        width_optional: false,
        height: None,
        depth: None,
    };

    /// Whether the form shows this field
    pub fn shows(&self, field: InputField) -> bool {
        match field {
            InputField::Width | InputField::Margin => true,
            InputField::Height => self.height.is_some(),
            InputField::Depth => self.depth.is_some(),
        }
    }
}

/// Static description of one calculator.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorDefinition {
    pub id: CalculatorId,
    pub title: &'static str,
    pub description: &'static str,
    /// Niches that see this calculator
    pub niches: &'static [Niche],
    pub labels: InputLabels,
    pub guidance: Guidance,
}

impl CalculatorDefinition {
    /// Visible to a company of the given niche (or to everyone via `Geral`)
    pub fn applies_to(&self, niche: Niche) -> bool {
        self.niches.contains(&niche) || self.niches.contains(&Niche::Geral)
    }
}

static REGISTRY: Lazy<Vec<CalculatorDefinition>> =
    Lazy::new(|| CalculatorId::ALL.iter().map(|&id| build_definition(id)).collect());

/// Static metadata for a calculator.
pub fn definition(id: CalculatorId) -> &'static CalculatorDefinition {
    &REGISTRY[id.index()]
}

/// All definitions, in display order.
pub fn all_definitions() -> &'static [CalculatorDefinition] {
    &REGISTRY
}

/// Calculators offered to a company of the given niche, in display order.
pub fn available_for(niche: Niche) -> Vec<&'static CalculatorDefinition> {
    REGISTRY.iter().filter(|def| def.applies_to(niche)).collect()
}

const DRYWALL_TRADES: &[Niche] = &[Niche::Geral, Niche::GessoDrywall];
const MASONRY_TRADES: &[Niche] = &[Niche::Geral, Niche::Alvenaria];
const STAIR_TRADES: &[Niche] = &[Niche::Geral, Niche::Alvenaria, Niche::Engenharia];
const FINISHING_TRADES: &[Niche] = &[Niche::Geral, Niche::Alvenaria, Niche::Acabamento];
const PAINT_TRADES: &[Niche] = &[Niche::Geral, Niche::Pintura];
const SLOPE_TRADES: &[Niche] = &[Niche::Geral, Niche::Alvenaria, Niche::Hidraulica];
const PLUMBING_TRADES: &[Niche] = &[Niche::Geral, Niche::Hidraulica];

fn build_definition(id: CalculatorId) -> CalculatorDefinition {
    let (title, description, niches, labels) = match id {
        CalculatorId::DrywallWall => (
            "Parede Drywall",
            "Chapas, perfis e parafusos.",
            DRYWALL_TRADES,
            InputLabels::AREA,
        ),
        CalculatorId::DrywallCeiling => (
            "Forro Acartonado",
            "Estrutura F530 e placas.",
            DRYWALL_TRADES,
            InputLabels::AREA,
        ),
        CalculatorId::ConventionalCeiling => (
            "Forro Convencional",
            "Placas 60x60 e sisal.",
            DRYWALL_TRADES,
            InputLabels::AREA,
        ),
        CalculatorId::Masonry => (
            "Alvenaria/Tijolos",
            "Tijolos e argamassa.",
            MASONRY_TRADES,
            InputLabels::AREA,
        ),
        CalculatorId::Stairs => (
            "Cálculo de Escada",
            "Degraus e espelhos.",
            STAIR_TRADES,
            InputLabels {
                width: "Largura do Degrau (m) [Opcional]",
                width_optional: true,
                height: Some("Altura / Desnível (m)"),
                depth: None,
            },
        ),
        CalculatorId::Flooring => (
            "Piso e Azulejo",
            "Peças e argamassa.",
            FINISHING_TRADES,
            InputLabels::AREA,
        ),
        CalculatorId::Subfloor => (
            "Contrapiso",
            "Volume de massa/concreto.",
            MASONRY_TRADES,
            InputLabels {
                depth: Some("Espessura (m)"),
                ..InputLabels::AREA
            },
        ),
        CalculatorId::RibbedSlab => (
            "Laje Treliçada",
            "Vigotas e isopor.",
            MASONRY_TRADES,
            InputLabels::AREA,
        ),
        CalculatorId::Paint => (
            "Pintura",
            "Tinta por demão.",
            PAINT_TRADES,
            InputLabels::AREA,
        ),
        CalculatorId::Ramp => (
            "Rampa e Caída",
            "Inclinação percentual.",
            SLOPE_TRADES,
            InputLabels {
                height: Some("Altura / Desnível (m)"),
                ..InputLabels::AREA
            },
        ),
        CalculatorId::Plumbing => (
            "Tubulação",
            "Estimativa linear.",
            PLUMBING_TRADES,
            InputLabels::LENGTH_ONLY,
        ),
        CalculatorId::Baseboard => (
            "Rodapé",
            "Peças lineares.",
            FINISHING_TRADES,
            InputLabels::LENGTH_ONLY,
        ),
    };

    CalculatorDefinition {
        id,
        title,
        description,
        niches,
        labels,
        guidance: guidance::for_calculator(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_ids() {
        for id in CalculatorId::ALL {
            assert_eq!(definition(id).id, id);
        }
        assert_eq!(all_definitions().len(), CalculatorId::ALL.len());
    }

    #[test]
    fn test_lookup_accepts_ids_and_aliases() {
        for id in CalculatorId::ALL {
            assert_eq!(CalculatorId::lookup(id.id()), Some(id));
            assert_eq!(CalculatorId::lookup(id.alias()), Some(id));
        }
        assert_eq!(CalculatorId::lookup("  Drywall-Wall "), Some(CalculatorId::DrywallWall));
        assert_eq!(CalculatorId::lookup("impermeabilizacao"), None);
    }

    #[test]
    fn test_from_str_unknown_is_error() {
        let err = "telhado".parse::<CalculatorId>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CALCULATOR");
    }

    #[test]
    fn test_id_serialization() {
        let json = serde_json::to_string(&CalculatorId::Plumbing).unwrap();
        assert_eq!(json, "\"hidraulica-tubos\"");
        let id: CalculatorId = serde_json::from_str("\"rodape\"").unwrap();
        assert_eq!(id, CalculatorId::Baseboard);
    }

    #[test]
    fn test_niche_parsing() {
        assert_eq!("Gesso e Drywall".parse::<Niche>().unwrap(), Niche::GessoDrywall);
        assert_eq!("hidraulica".parse::<Niche>().unwrap(), Niche::Hidraulica);
        assert_eq!("ELÉTRICA".parse::<Niche>().unwrap(), Niche::Eletrica);
        assert!("Marcenaria".parse::<Niche>().is_err());
    }

    #[test]
    fn test_niche_serialization() {
        assert_eq!(serde_json::to_string(&Niche::Hidraulica).unwrap(), "\"Hidráulica\"");
    }

    #[test]
    fn test_every_niche_sees_general_calculators() {
        // Every calculator lists Geral, so the filter currently shows all of them.
        for niche in Niche::ALL {
            assert_eq!(available_for(niche).len(), CalculatorId::ALL.len());
        }
    }

    #[test]
    fn test_applies_to_without_general() {
        let def = CalculatorDefinition {
            niches: &[Niche::Pintura],
            ..definition(CalculatorId::Paint).clone()
        };
        assert!(def.applies_to(Niche::Pintura));
        assert!(!def.applies_to(Niche::Eletrica));
    }

    #[test]
    fn test_labels() {
        let plumbing = definition(CalculatorId::Plumbing);
        assert!(!plumbing.labels.shows(InputField::Height));
        assert!(!plumbing.labels.shows(InputField::Depth));

        let subfloor = definition(CalculatorId::Subfloor);
        assert_eq!(subfloor.labels.depth, Some("Espessura (m)"));

        let stairs = definition(CalculatorId::Stairs);
        assert!(stairs.labels.width_optional);
        assert_eq!(stairs.labels.height, Some("Altura / Desnível (m)"));
    }
}
