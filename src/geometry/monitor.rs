use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, Result, ValidationError};
use crate::units::{Length, LengthUnit};

use super::check_position;

/// Curvature of a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Curvature {
    /// A flat panel (infinite radius).
    #[default]
    Flat,
    /// A panel bent around a circle of the given radius, in centimeters.
    Curved { radius: f64 },
}

impl Curvature {
    /// Radius offered for curved panels when none is given, in millimeters.
    pub const DEFAULT_RADIUS_MM: f64 = 1500.0;

    /// Creates a curvature from a radius.
    ///
    /// An infinite radius denotes a flat panel.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositive`] if the radius is not positive.
    pub fn from_radius(radius: Length) -> Result<Self> {
        let radius = radius.to_cm();
        if radius.is_infinite() && radius > 0.0 {
            return Ok(Curvature::Flat);
        }
        if radius.is_nan() || radius <= 0.0 {
            return Err(ValidationError::NonPositive {
                parameter: "radius",
                value: radius,
            }
            .into());
        }
        Ok(Curvature::Curved { radius })
    }

    /// Curvature with [`Self::DEFAULT_RADIUS_MM`].
    #[must_use]
    pub fn default_curved() -> Self {
        Curvature::Curved {
            radius: Length::mm(Self::DEFAULT_RADIUS_MM).to_cm(),
        }
    }

    /// Curvature radius in centimeters; infinite for flat panels.
    #[must_use]
    pub fn radius(&self) -> f64 {
        match self {
            Curvature::Flat => f64::INFINITY,
            Curvature::Curved { radius } => *radius,
        }
    }

    #[must_use]
    pub fn is_flat(&self) -> bool {
        matches!(self, Curvature::Flat)
    }
}

/// Parses `"flat"`, `"inf"` or a radius such as `"1500mm"`.
impl FromStr for Curvature {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "flat" | "inf" => Ok(Curvature::Flat),
            radius => Self::from_radius(radius.parse()?),
        }
    }
}

/// Width-to-height ratio of a display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// Creates an aspect ratio from a width/height quotient.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositive`] if the ratio is not positive and finite.
    pub fn new(ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ValidationError::NonPositive {
                parameter: "aspect ratio",
                value: ratio,
            }
            .into());
        }
        Ok(Self(ratio))
    }

    /// Creates an aspect ratio from a `width:height` pair, e.g. `16:9`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositive`] if either side is not positive.
    pub fn from_pair(width: f64, height: f64) -> Result<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(ValidationError::NonPositive {
                parameter: "aspect ratio height",
                value: height,
            }
            .into());
        }
        Self::new(width / height)
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.0
    }
}

/// Parses `"16:9"` or a plain quotient such as `"2.35"`.
impl FromStr for AspectRatio {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ValidationError::InvalidAspectRatio(s.to_owned());
        let number = |part: &str| part.trim().parse::<f64>().map_err(|_| invalid());
        match s.split_once(':') {
            Some((width, height)) => Self::from_pair(number(width)?, number(height)?),
            None => Self::new(number(s)?),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Intrinsic, placement-independent geometry of one display.
///
/// Only the diagonal, aspect ratio and curvature are stored; every other
/// quantity is derived from them. All lengths are in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorSpec {
    diagonal: f64,
    aspect_ratio: f64,
    curvature: Curvature,
}

impl MonitorSpec {
    /// Creates a new monitor description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositive`] if the diagonal is not positive and finite.
    pub fn new(diagonal: Length, aspect_ratio: AspectRatio, curvature: Curvature) -> Result<Self> {
        let diagonal = diagonal.to_cm();
        if !diagonal.is_finite() || diagonal <= 0.0 {
            return Err(ValidationError::NonPositive {
                parameter: "diagonal length",
                value: diagonal,
            }
            .into());
        }
        Ok(Self {
            diagonal,
            aspect_ratio: aspect_ratio.ratio(),
            curvature,
        })
    }

    /// Creates a flat monitor.
    ///
    /// # Errors
    ///
    /// See [`MonitorSpec::new`].
    pub fn flat(diagonal: Length, aspect_ratio: AspectRatio) -> Result<Self> {
        Self::new(diagonal, aspect_ratio, Curvature::Flat)
    }

    /// Creates a curved monitor with the given curvature radius.
    ///
    /// # Errors
    ///
    /// See [`MonitorSpec::new`] and [`Curvature::from_radius`].
    pub fn curved(diagonal: Length, aspect_ratio: AspectRatio, radius: Length) -> Result<Self> {
        Self::new(diagonal, aspect_ratio, Curvature::from_radius(radius)?)
    }

    /// Creates a monitor from raw numbers and unit tokens, e.g.
    /// `from_tokens(24.0, "in", 16.0 / 9.0, f64::INFINITY, "mm")`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown unit tokens or out-of-range values.
    pub fn from_tokens(
        diagonal: f64,
        diagonal_unit: &str,
        aspect_ratio: f64,
        radius: f64,
        radius_unit: &str,
    ) -> Result<Self> {
        let diagonal = Length::from_token(diagonal, diagonal_unit)?;
        let radius = Length::from_token(radius, radius_unit)?;
        Self::new(
            diagonal,
            AspectRatio::new(aspect_ratio)?,
            Curvature::from_radius(radius)?,
        )
    }

    /// Zero-width flat placeholder used to seed a smooth layout with an even
    /// number of monitors.
    pub(crate) fn placeholder() -> Self {
        Self::from_raw(0.0, 1.0, Curvature::Flat)
    }

    /// Builds a monitor from already validated values (diagonal in centimeters).
    pub(crate) fn from_raw(diagonal: f64, aspect_ratio: f64, curvature: Curvature) -> Self {
        Self {
            diagonal,
            aspect_ratio,
            curvature,
        }
    }

    /// Diagonal length in centimeters.
    #[must_use]
    pub fn diagonal_length(&self) -> f64 {
        self.diagonal
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    #[must_use]
    pub fn curvature(&self) -> Curvature {
        self.curvature
    }

    /// Curvature radius in centimeters; infinite for flat panels.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.curvature.radius()
    }

    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.curvature.is_flat()
    }

    /// Angle between the diagonal and the long edge.
    fn diagonal_angle(&self) -> f64 {
        (1.0 / self.aspect_ratio).atan()
    }

    /// Width measured along the (possibly curved) surface.
    #[must_use]
    pub fn arc_width(&self) -> f64 {
        self.diagonal * self.diagonal_angle().cos()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.diagonal * self.diagonal_angle().sin()
    }

    /// Angle subtended at the curvature center by the arc width, `None` when flat.
    #[must_use]
    pub fn central_angle(&self) -> Option<f64> {
        match self.curvature {
            Curvature::Flat => None,
            Curvature::Curved { radius } => Some(self.arc_width() / radius),
        }
    }

    /// Straight-line distance between the two edges.
    #[must_use]
    pub fn chord_width(&self) -> f64 {
        match self.central_angle() {
            None => self.arc_width(),
            Some(angle) => 2.0 * self.radius() * (angle / 2.0).sin(),
        }
    }

    /// How far the surface bows toward the viewer relative to its chord.
    #[must_use]
    pub fn depth(&self) -> f64 {
        match self.central_angle() {
            None => 0.0,
            Some(angle) => self.radius() * (1.0 - (angle / 2.0).cos()),
        }
    }

    /// Visible area in square centimeters.
    #[must_use]
    pub fn display_area(&self) -> f64 {
        self.height() * self.arc_width()
    }

    /// Signed angle between the surface tangent at `position` and the chord.
    ///
    /// Positive toward the left edge, zero at the center and for flat panels.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PositionOutOfRange`] if `position` is outside `[0, 1]`.
    pub fn arc_angle(&self, position: f64) -> Result<f64> {
        check_position(position)?;
        Ok(self
            .central_angle()
            .map_or(0.0, |angle| (0.5 - position) * angle))
    }

    /// Diagonal expressed in `unit`, for reports.
    #[must_use]
    pub fn diagonal_in(&self, unit: LengthUnit) -> f64 {
        unit.convert_cm(self.diagonal)
    }
}
