//! # Unit Types
//!
//! Type-safe wrappers for the metric quantities the calculators work in,
//! plus the [`Unit`] labels attached to material lines.
//!
//! ## Design Philosophy
//!
//! Simple newtype wrappers rather than a full units library:
//! - Site measurements are always metric (m, m², m³)
//! - JSON serialization stays clean (just numbers)
//! - Multiplying lengths yields areas, areas by lengths yields volumes
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::units::{Meters, SquareMeters, CubicMeters};
//!
//! let area: SquareMeters = Meters(4.0) * Meters(2.5);
//! assert_eq!(area.0, 10.0);
//!
//! let volume: CubicMeters = area * Meters(0.05);
//! assert!((volume.0 - 0.5).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometric Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl Mul<Meters> for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<Meters> for SquareMeters {
    type Output = CubicMeters;
    fn mul(self, rhs: Meters) -> CubicMeters {
        CubicMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(CubicMeters);

// ============================================================================
// Line-item Units
// ============================================================================

/// Purchase/measurement unit printed next to a material quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Loose piece or kit ("un")
    Piece,
    /// Linear meter
    Meter,
    /// Square meter
    SquareMeter,
    /// Cubic meter
    CubicMeter,
    /// Kilogram
    Kilogram,
    /// Liter
    Liter,
    /// 50 kg cement bag ("sc", saco)
    Bag,
}

impl Unit {
    /// Short symbol as printed on material lists
    ///
    /// # Example
    /// ```
    /// use estimate_core::units::Unit;
    /// assert_eq!(Unit::SquareMeter.symbol(), "m²");
    /// assert_eq!(Unit::Bag.symbol(), "sc");
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Piece => "un",
            Unit::Meter => "m",
            Unit::SquareMeter => "m²",
            Unit::CubicMeter => "m³",
            Unit::Kilogram => "kg",
            Unit::Liter => "L",
            Unit::Bag => "sc",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round up to a whole purchasable unit.
///
/// Float-to-int casts saturate, so NaN and negative inputs yield 0.
pub fn ceil_units(value: f64) -> u64 {
    value.ceil() as u64
}

/// Round to a fixed number of decimal places for reporting.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_and_volume_products() {
        let area = Meters(4.0) * Meters(2.7);
        assert!((area.0 - 10.8).abs() < 1e-12);
        let volume = SquareMeters(20.0) * Meters(0.05);
        assert!((volume.0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_ceil_units() {
        assert_eq!(ceil_units(4.125), 5);
        assert_eq!(ceil_units(4.0), 4);
        assert_eq!(ceil_units(0.0), 0);
        assert_eq!(ceil_units(-3.2), 0);
        assert_eq!(ceil_units(f64::NAN), 0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(5.4321, 1), 5.4);
        assert_eq!(round_to(0.376, 2), 0.38);
        assert_eq!(round_to(7.0, 0), 7.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(12.5);
        assert_eq!(serde_json::to_string(&m).unwrap(), "12.5");
        assert_eq!(serde_json::to_string(&Unit::CubicMeter).unwrap(), "\"cubic_meter\"");
    }
}
