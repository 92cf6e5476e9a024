//! # Estimation Constants
//!
//! Every consumption rate, module size and threshold used by the calculators.
//! These are rule-of-thumb values, not certified engineering data; the
//! defaults reproduce the figures used in the field and can be overridden per
//! company through a TOML file (see [`crate::file_io::load_constants`]).
//!
//! ## TOML Example
//!
//! ```toml
//! [masonry]
//! bricks_per_m2 = 28.0
//!
//! [stairs]
//! riser_height_m = 0.17
//! ```
//!
//! Keys that are not present keep their defaults.

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Root container for all calculator constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EstimationConstants {
    pub input: InputConstants,
    pub drywall: DrywallConstants,
    pub ceiling: CeilingConstants,
    pub masonry: MasonryConstants,
    pub stairs: StairConstants,
    pub flooring: FlooringConstants,
    pub screed: ScreedConstants,
    pub slab: SlabConstants,
    pub paint: PaintConstants,
    pub ramp: RampConstants,
    pub linear: LinearConstants,
}

/// Limits applied while reading user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConstants {
    /// Largest accepted safety margin (%)
    pub max_margin_percent: f64,
}

impl Default for InputConstants {
    fn default() -> Self {
        InputConstants {
            max_margin_percent: 20.0,
        }
    }
}

/// Drywall partition and ceiling system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrywallConstants {
    /// Area covered by one 1.20 x 2.40 sheet
    pub sheet_area_m2: f64,
    /// Stud spacing along the wall
    pub stud_spacing_m: f64,
    /// Length of one floor/ceiling track bar
    pub track_length_m: f64,
    /// F530 ceiling profile per square meter
    pub ceiling_profile_m_per_m2: f64,
    /// Ceiling area carried by one hanger rod
    pub hanger_area_m2: f64,
}

impl Default for DrywallConstants {
    fn default() -> Self {
        DrywallConstants {
            sheet_area_m2: 2.88,
            stud_spacing_m: 0.60,
            track_length_m: 3.0,
            ceiling_profile_m_per_m2: 2.5,
            hanger_area_m2: 1.5,
        }
    }
}

/// Conventional cast-plaster ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CeilingConstants {
    /// Area of one 60 x 60 tile
    pub tile_area_m2: f64,
    pub sisal_kg_per_m2: f64,
    pub plaster_glue_kg_per_m2: f64,
}

impl Default for CeilingConstants {
    fn default() -> Self {
        CeilingConstants {
            tile_area_m2: 0.36,
            sisal_kg_per_m2: 0.5,
            plaster_glue_kg_per_m2: 1.0,
        }
    }
}

/// Brick/block masonry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasonryConstants {
    pub bricks_per_m2: f64,
    pub cement_bags_per_m2: f64,
    /// Bricks are sold and priced per this many units (milheiro)
    pub brick_price_batch: f64,
}

impl Default for MasonryConstants {
    fn default() -> Self {
        MasonryConstants {
            bricks_per_m2: 25.0,
            cement_bags_per_m2: 0.3,
            brick_price_batch: 1000.0,
        }
    }
}

/// Straight-flight stairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StairConstants {
    /// Target riser height
    pub riser_height_m: f64,
    /// Ideal tread depth
    pub tread_depth_m: f64,
}

impl Default for StairConstants {
    fn default() -> Self {
        StairConstants {
            riser_height_m: 0.18,
            tread_depth_m: 0.28,
        }
    }
}

/// Floor and wall tiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlooringConstants {
    pub mortar_kg_per_m2: f64,
    pub grout_kg_per_m2: f64,
}

impl Default for FlooringConstants {
    fn default() -> Self {
        FlooringConstants {
            mortar_kg_per_m2: 4.0,
            grout_kg_per_m2: 0.3,
        }
    }
}

/// Subfloor screed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreedConstants {
    /// Thickness used when none is given
    pub default_thickness_m: f64,
    pub sand_m3_per_m3: f64,
    pub cement_bags_per_m3: f64,
}

impl Default for ScreedConstants {
    fn default() -> Self {
        ScreedConstants {
            default_thickness_m: 0.05,
            sand_m3_per_m3: 0.7,
            cement_bags_per_m3: 7.0,
        }
    }
}

/// Ribbed (joist and filler block) slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlabConstants {
    /// Joist length per meter of slab width
    pub joist_m_per_m_width: f64,
    pub filler_blocks_per_m2: f64,
    /// Concrete topping thickness
    pub topping_thickness_m: f64,
}

impl Default for SlabConstants {
    fn default() -> Self {
        SlabConstants {
            joist_m_per_m_width: 2.0,
            filler_blocks_per_m2: 3.5,
            topping_thickness_m: 0.08,
        }
    }
}

/// Wall painting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConstants {
    pub coats: f64,
    /// Paint coverage per liter per coat
    pub paint_yield_m2_per_l: f64,
    pub sealer_yield_m2_per_l: f64,
}

impl Default for PaintConstants {
    fn default() -> Self {
        PaintConstants {
            coats: 2.0,
            paint_yield_m2_per_l: 10.0,
            sealer_yield_m2_per_l: 15.0,
        }
    }
}

/// Ramp slope check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RampConstants {
    /// Steepest accessible slope (NBR 9050)
    pub max_accessible_slope_percent: f64,
}

impl Default for RampConstants {
    fn default() -> Self {
        RampConstants {
            max_accessible_slope_percent: 8.33,
        }
    }
}

/// Materials sold in fixed-length bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearConstants {
    pub pipe_bar_length_m: f64,
    pub baseboard_bar_length_m: f64,
}

impl Default for LinearConstants {
    fn default() -> Self {
        LinearConstants {
            pipe_bar_length_m: 6.0,
            baseboard_bar_length_m: 2.0,
        }
    }
}

impl EstimationConstants {
    /// Check that every constant is finite, non-negative, and that divisors
    /// are strictly positive.
    pub fn validate(&self) -> EstimateResult<()> {
        let divisors = [
            ("drywall.sheet_area_m2", self.drywall.sheet_area_m2),
            ("drywall.stud_spacing_m", self.drywall.stud_spacing_m),
            ("drywall.track_length_m", self.drywall.track_length_m),
            ("drywall.hanger_area_m2", self.drywall.hanger_area_m2),
            ("ceiling.tile_area_m2", self.ceiling.tile_area_m2),
            ("masonry.brick_price_batch", self.masonry.brick_price_batch),
            ("stairs.riser_height_m", self.stairs.riser_height_m),
            ("paint.paint_yield_m2_per_l", self.paint.paint_yield_m2_per_l),
            ("paint.sealer_yield_m2_per_l", self.paint.sealer_yield_m2_per_l),
            ("linear.pipe_bar_length_m", self.linear.pipe_bar_length_m),
            ("linear.baseboard_bar_length_m", self.linear.baseboard_bar_length_m),
        ];
        for (field, value) in divisors {
            if !value.is_finite() || value <= 0.0 {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "must be positive",
                ));
            }
        }

        let rates = [
            ("input.max_margin_percent", self.input.max_margin_percent),
            ("drywall.ceiling_profile_m_per_m2", self.drywall.ceiling_profile_m_per_m2),
            ("ceiling.sisal_kg_per_m2", self.ceiling.sisal_kg_per_m2),
            ("ceiling.plaster_glue_kg_per_m2", self.ceiling.plaster_glue_kg_per_m2),
            ("masonry.bricks_per_m2", self.masonry.bricks_per_m2),
            ("masonry.cement_bags_per_m2", self.masonry.cement_bags_per_m2),
            ("stairs.tread_depth_m", self.stairs.tread_depth_m),
            ("flooring.mortar_kg_per_m2", self.flooring.mortar_kg_per_m2),
            ("flooring.grout_kg_per_m2", self.flooring.grout_kg_per_m2),
            ("screed.default_thickness_m", self.screed.default_thickness_m),
            ("screed.sand_m3_per_m3", self.screed.sand_m3_per_m3),
            ("screed.cement_bags_per_m3", self.screed.cement_bags_per_m3),
            ("slab.joist_m_per_m_width", self.slab.joist_m_per_m_width),
            ("slab.filler_blocks_per_m2", self.slab.filler_blocks_per_m2),
            ("slab.topping_thickness_m", self.slab.topping_thickness_m),
            ("paint.coats", self.paint.coats),
            ("ramp.max_accessible_slope_percent", self.ramp.max_accessible_slope_percent),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "must be a finite, non-negative number",
                ));
            }
        }

        Ok(())
    }
}
