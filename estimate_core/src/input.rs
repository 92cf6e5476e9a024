//! # Calculator Input
//!
//! Raw form values arrive as strings. They are parsed leniently: anything
//! that is not a number becomes `0`, and every correction is reported as an
//! [`InputWarning`] instead of an error, so a half-filled form still produces
//! a (degenerate) estimate.
//!
//! Accepted forms:
//! - plain decimals: `"4"`, `"2.70"`, `".5"`
//! - comma decimals: `"2,70"`
//! - a numeric prefix followed by junk: `"4m"` reads as `4`
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::input::{RawInput, EstimationInput};
//!
//! let raw = RawInput::new("4", "2,7").with_margin("10");
//! let parsed = EstimationInput::from_raw(&raw);
//! assert_eq!(parsed.input.width, 4.0);
//! assert_eq!(parsed.input.height, 2.7);
//! assert!(parsed.warnings.is_empty());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::InputConstants;
use crate::units::{CubicMeters, Meters, SquareMeters};

/// Form values exactly as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    /// Width, perimeter, total length or run, depending on the calculator
    pub width: String,
    /// Height, length or rise, depending on the calculator
    pub height: String,
    /// Thickness (screed only)
    pub depth: String,
    /// Safety margin in percent
    pub margin: String,
}

impl Default for RawInput {
    fn default() -> Self {
        RawInput {
            width: String::new(),
            height: String::new(),
            depth: String::new(),
            margin: "10".to_string(),
        }
    }
}

impl RawInput {
    /// Create raw input with the default 10% margin.
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        RawInput {
            width: width.into(),
            height: height.into(),
            ..RawInput::default()
        }
    }

    pub fn with_depth(mut self, depth: impl Into<String>) -> Self {
        self.depth = depth.into();
        self
    }

    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = margin.into();
        self
    }
}

/// Numeric calculator input.
///
/// Built either from [`RawInput`] or directly. The engine sanitizes it again
/// before use, so values constructed in code get the same guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    pub width: f64,
    pub height: f64,
    pub depth: Option<f64>,
    pub margin_percent: f64,
}

impl Default for EstimationInput {
    fn default() -> Self {
        EstimationInput {
            width: 0.0,
            height: 0.0,
            depth: None,
            margin_percent: 10.0,
        }
    }
}

/// Which form field a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Width,
    Height,
    Depth,
    Margin,
}

impl InputField {
    pub fn name(&self) -> &'static str {
        match self {
            InputField::Width => "width",
            InputField::Height => "height",
            InputField::Depth => "depth",
            InputField::Margin => "margin",
        }
    }
}

/// What was wrong with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Field left empty
    Missing,
    /// No number could be read
    Unparseable,
    /// A number was read but trailing text was ignored
    TrailingText,
    /// Negative value replaced by zero
    Negative,
    /// NaN or infinity replaced by zero
    NotFinite,
    /// Margin outside the accepted range
    MarginClamped,
}

/// A correction applied to one input value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputWarning {
    pub field: InputField,
    pub kind: WarningKind,
    /// Original text (or number) supplied
    pub supplied: String,
    /// Value actually used
    pub applied: f64,
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            WarningKind::Missing => "missing",
            WarningKind::Unparseable => "not a number",
            WarningKind::TrailingText => "trailing text ignored",
            WarningKind::Negative => "negative",
            WarningKind::NotFinite => "not finite",
            WarningKind::MarginClamped => "out of range",
        };
        write!(
            f,
            "{}: '{}' {} (using {})",
            self.field.name(),
            self.supplied,
            what,
            self.applied
        )
    }
}

/// Parsed input together with the corrections made while reading it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    pub input: EstimationInput,
    pub warnings: Vec<InputWarning>,
}

/// Outcome of reading one numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    Empty,
    Invalid,
    Value(f64),
    /// Numeric prefix read, rest of the text ignored
    Prefix(f64),
}

/// Read a number the forgiving way.
///
/// # Example
/// ```
/// use estimate_core::input::{parse_number, ParsedNumber};
/// assert_eq!(parse_number(" 2,70 "), ParsedNumber::Value(2.7));
/// assert_eq!(parse_number("4m"), ParsedNumber::Prefix(4.0));
/// assert_eq!(parse_number("abc"), ParsedNumber::Invalid);
/// assert_eq!(parse_number(""), ParsedNumber::Empty);
/// ```
pub fn parse_number(raw: &str) -> ParsedNumber {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedNumber::Empty;
    }

    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    let end = numeric_prefix_len(normalized.as_bytes());
    if end == 0 {
        return ParsedNumber::Invalid;
    }

    match normalized[..end].parse::<f64>() {
        Ok(value) if end == normalized.len() => ParsedNumber::Value(value),
        Ok(value) => ParsedNumber::Prefix(value),
        Err(_) => ParsedNumber::Invalid,
    }
}

/// Length of the longest `[+-]digits[.digits][e[+-]digits]` prefix, or 0 if
/// it contains no digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

impl EstimationInput {
    pub fn new(width: f64, height: f64) -> Self {
        EstimationInput {
            width,
            height,
            ..EstimationInput::default()
        }
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_margin(mut self, margin_percent: f64) -> Self {
        self.margin_percent = margin_percent;
        self
    }

    /// Parse raw form values with the default margin limit.
    pub fn from_raw(raw: &RawInput) -> ParsedInput {
        Self::from_raw_with(raw, &InputConstants::default())
    }

    /// Parse raw form values. Never fails; see module docs.
    pub fn from_raw_with(raw: &RawInput, limits: &InputConstants) -> ParsedInput {
        let mut warnings = Vec::new();

        let width = read_required(InputField::Width, &raw.width, &mut warnings);
        let height = read_required(InputField::Height, &raw.height, &mut warnings);
        let depth = read_optional(InputField::Depth, &raw.depth, &mut warnings);
        let margin_percent = read_required(InputField::Margin, &raw.margin, &mut warnings);

        let parsed = EstimationInput {
            width,
            height,
            depth,
            margin_percent,
        };
        let sanitized = parsed.sanitized(limits);
        warnings.extend(sanitized.warnings);

        ParsedInput {
            input: sanitized.input,
            warnings,
        }
    }

    /// Replace negative and non-finite values by zero and clamp the margin.
    pub fn sanitized(&self, limits: &InputConstants) -> ParsedInput {
        let mut warnings = Vec::new();

        let width = non_negative(InputField::Width, self.width, &mut warnings);
        let height = non_negative(InputField::Height, self.height, &mut warnings);
        let depth = self
            .depth
            .map(|d| non_negative(InputField::Depth, d, &mut warnings));

        let mut margin_percent =
            non_negative(InputField::Margin, self.margin_percent, &mut warnings);
        let max_margin = limits.max_margin_percent.max(0.0);
        if margin_percent > max_margin {
            warnings.push(InputWarning {
                field: InputField::Margin,
                kind: WarningKind::MarginClamped,
                supplied: margin_percent.to_string(),
                applied: max_margin,
            });
            margin_percent = max_margin;
        }

        ParsedInput {
            input: EstimationInput {
                width,
                height,
                depth,
                margin_percent,
            },
            warnings,
        }
    }

    /// Multiplier applied to quantities that absorb cutting loss
    pub fn safety_factor(&self) -> f64 {
        1.0 + (self.margin_percent / 100.0)
    }

    /// Width x height
    pub fn area(&self) -> SquareMeters {
        Meters(self.width) * Meters(self.height)
    }

    /// Area times the given thickness, or the fallback when depth is absent or zero
    pub fn volume_or(&self, fallback_thickness: Meters) -> CubicMeters {
        let thickness = match self.depth {
            Some(d) if d > 0.0 => Meters(d),
            _ => fallback_thickness,
        };
        self.area() * thickness
    }
}

fn read_required(field: InputField, raw: &str, warnings: &mut Vec<InputWarning>) -> f64 {
    read_optional(field, raw, warnings).unwrap_or_else(|| {
        if raw.trim().is_empty() {
            warnings.push(InputWarning {
                field,
                kind: WarningKind::Missing,
                supplied: raw.to_string(),
                applied: 0.0,
            });
        }
        0.0
    })
}

fn read_optional(field: InputField, raw: &str, warnings: &mut Vec<InputWarning>) -> Option<f64> {
    match parse_number(raw) {
        ParsedNumber::Empty => None,
        ParsedNumber::Invalid => {
            warnings.push(InputWarning {
                field,
                kind: WarningKind::Unparseable,
                supplied: raw.to_string(),
                applied: 0.0,
            });
            if field == InputField::Depth {
                None
            } else {
                Some(0.0)
            }
        }
        ParsedNumber::Value(v) => Some(v),
        ParsedNumber::Prefix(v) => {
            warnings.push(InputWarning {
                field,
                kind: WarningKind::TrailingText,
                supplied: raw.to_string(),
                applied: v,
            });
            Some(v)
        }
    }
}

fn non_negative(field: InputField, value: f64, warnings: &mut Vec<InputWarning>) -> f64 {
    if !value.is_finite() {
        warnings.push(InputWarning {
            field,
            kind: WarningKind::NotFinite,
            supplied: value.to_string(),
            applied: 0.0,
        });
        0.0
    } else if value < 0.0 {
        warnings.push(InputWarning {
            field,
            kind: WarningKind::Negative,
            supplied: value.to_string(),
            applied: 0.0,
        });
        0.0
    } else {
        value
    }
}
