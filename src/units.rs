//! Length and angle units.
//!
//! Every physical length in the engine is stored in centimeters. Unit tokens
//! are converted through a fixed table:
//!
//! | token | centimeters |
//! |-------|-------------|
//! | `mm`  | 0.1         |
//! | `cm`  | 1           |
//! | `m`   | 100         |
//! | `in`  | 2.54        |
//! | `ft`  | 30.48       |

use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, Result, ValidationError};

/// A unit of length accepted for diagonals, radii, distances and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Foot,
}

impl LengthUnit {
    /// All supported units, in table order.
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];

    /// Number of centimeters in one of this unit.
    #[must_use]
    pub fn centimeters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.1,
            LengthUnit::Centimeter => 1.0,
            LengthUnit::Meter => 100.0,
            LengthUnit::Inch => 2.54,
            LengthUnit::Foot => 30.48,
        }
    }

    /// The token this unit is parsed from.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }

    /// Converts a length in centimeters into this unit.
    #[must_use]
    pub fn convert_cm(self, centimeters: f64) -> f64 {
        centimeters / self.centimeters()
    }

    /// Converts an area in square centimeters into this unit squared.
    #[must_use]
    pub fn convert_cm2(self, square_centimeters: f64) -> f64 {
        square_centimeters / self.centimeters().powi(2)
    }
}

impl FromStr for LengthUnit {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        LengthUnit::ALL
            .into_iter()
            .find(|unit| unit.token() == s)
            .ok_or_else(|| ValidationError::UnknownLengthUnit(s.to_owned()).into())
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Unit for reported viewing angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Converts an angle in radians into this unit.
    #[must_use]
    pub fn convert_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians.to_degrees(),
            AngleUnit::Radians => radians,
        }
    }
}

impl FromStr for AngleUnit {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "degrees" => Ok(AngleUnit::Degrees),
            "radians" => Ok(AngleUnit::Radians),
            _ => Err(ValidationError::UnknownAngleUnit(s.to_owned()).into()),
        }
    }
}

/// A length tagged with the unit it was supplied in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    /// Creates a new length.
    #[must_use]
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a length in centimeters.
    #[must_use]
    pub fn cm(value: f64) -> Self {
        Self::new(value, LengthUnit::Centimeter)
    }

    /// Creates a length in inches.
    #[must_use]
    pub fn inches(value: f64) -> Self {
        Self::new(value, LengthUnit::Inch)
    }

    /// Creates a length in millimeters.
    #[must_use]
    pub fn mm(value: f64) -> Self {
        Self::new(value, LengthUnit::Millimeter)
    }

    /// Creates a length from a value and a unit token such as `"in"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownLengthUnit`] for an unrecognized token.
    pub fn from_token(value: f64, unit: &str) -> Result<Self> {
        Ok(Self::new(value, unit.parse()?))
    }

    /// The value in the unit it was supplied in.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit it was supplied in.
    #[must_use]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The length converted to centimeters.
    #[must_use]
    pub fn to_cm(self) -> f64 {
        self.value * self.unit.centimeters()
    }
}

/// Parses `"24in"`, `"60 cm"` or `"1.5m"`.
impl FromStr for Length {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| ValidationError::InvalidLength(s.to_owned()))?;
        let (number, unit) = s.split_at(split);
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidLength(s.to_owned()))?;
        Self::from_token(value, unit.trim())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn table_values() {
        assert_relative_eq!(LengthUnit::Millimeter.centimeters(), 0.1);
        assert_relative_eq!(LengthUnit::Centimeter.centimeters(), 1.0);
        assert_relative_eq!(LengthUnit::Meter.centimeters(), 100.0);
        assert_relative_eq!(LengthUnit::Inch.centimeters(), 2.54);
        assert_relative_eq!(LengthUnit::Foot.centimeters(), 30.48);
    }

    #[test]
    fn every_token_parses_back() {
        for unit in LengthUnit::ALL {
            assert_eq!(unit.token().parse::<LengthUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = "xyz".parse::<LengthUnit>().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Validation(ValidationError::UnknownLengthUnit(ref t)) if t == "xyz"
        ));
        // Tokens are case-sensitive.
        assert!("IN".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn angle_units() {
        assert_eq!("degrees".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!("radians".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert!(matches!(
            "gradians".parse::<AngleUnit>().unwrap_err(),
            LayoutError::Validation(ValidationError::UnknownAngleUnit(_))
        ));
        assert_relative_eq!(AngleUnit::Degrees.convert_radians(std::f64::consts::PI), 180.0);
        assert_relative_eq!(AngleUnit::Radians.convert_radians(1.25), 1.25);
    }

    #[test]
    fn length_conversions() {
        assert_relative_eq!(Length::inches(24.0).to_cm(), 60.96, epsilon = 1e-12);
        assert_relative_eq!(Length::mm(1500.0).to_cm(), 150.0, epsilon = 1e-12);
        assert_relative_eq!(LengthUnit::Inch.convert_cm(2.54), 1.0, epsilon = 1e-12);
        assert_relative_eq!(LengthUnit::Meter.convert_cm2(10_000.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn length_from_text() {
        let l: Length = "24in".parse().unwrap();
        assert_eq!(l, Length::inches(24.0));

        let l: Length = " 60 cm ".parse().unwrap();
        assert_eq!(l, Length::cm(60.0));

        let l: Length = "1.5m".parse().unwrap();
        assert_relative_eq!(l.to_cm(), 150.0, epsilon = 1e-12);
    }

    #[test]
    fn length_from_bad_text() {
        assert!(matches!(
            "24".parse::<Length>().unwrap_err(),
            LayoutError::Validation(ValidationError::InvalidLength(_))
        ));
        assert!(matches!(
            "abc".parse::<Length>().unwrap_err(),
            LayoutError::Validation(ValidationError::InvalidLength(_))
        ));
        assert!(matches!(
            "24 yd".parse::<Length>().unwrap_err(),
            LayoutError::Validation(ValidationError::UnknownLengthUnit(_))
        ));
    }
}
