use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::Result;
use crate::math::{Polar, Vector2};
use crate::units::AngleUnit;

use super::{check_position, MonitorSpec};

/// A monitor anchored in the setup's coordinate frame.
///
/// The viewer sits at the origin looking along +y. `left_end` and
/// `right_end` are the chord endpoints; `circle_center` is present exactly
/// when the monitor is curved.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMonitor {
    spec: MonitorSpec,
    left_end: Vector2,
    right_end: Vector2,
    circle_center: Option<Vector2>,
}

impl PlacedMonitor {
    /// Anchors `spec` between the given chord endpoints and derives its
    /// curvature center.
    pub(crate) fn new(spec: MonitorSpec, left_end: Vector2, right_end: Vector2) -> Self {
        let mut placed = Self {
            spec,
            left_end,
            right_end,
            circle_center: None,
        };
        placed.circle_center = placed.compute_circle_center();
        placed
    }

    /// Center of curvature: offset from the chord midpoint by `radius - depth`,
    /// perpendicular to the chord on the side away from the surface.
    fn compute_circle_center(&self) -> Option<Vector2> {
        if self.spec.is_flat() {
            return None;
        }
        let direction = self.chord_direction() + FRAC_PI_2;
        let length = self.spec.radius() - self.spec.depth();
        Some(self.midpoint() + Vector2::from_polar(length, direction))
    }

    /// The intrinsic geometry of this monitor.
    #[must_use]
    pub fn spec(&self) -> &MonitorSpec {
        &self.spec
    }

    #[must_use]
    pub fn left_end(&self) -> Vector2 {
        self.left_end
    }

    #[must_use]
    pub fn right_end(&self) -> Vector2 {
        self.right_end
    }

    /// Center of curvature, `None` for flat monitors.
    #[must_use]
    pub fn circle_center(&self) -> Option<Vector2> {
        self.circle_center
    }

    /// Midpoint of the chord.
    #[must_use]
    pub fn midpoint(&self) -> Vector2 {
        (self.left_end + self.right_end) * 0.5
    }

    /// Phase of the chord vector pointing from the right end to the left end.
    #[must_use]
    pub fn chord_direction(&self) -> f64 {
        (self.left_end - self.right_end).phase()
    }

    /// Point on the surface at `position` (0 = left edge, 1 = right edge).
    ///
    /// Curved monitors interpolate the phase of the endpoints as seen from the
    /// curvature center, which is not arc-length exact.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PositionOutOfRange` if `position` is outside `[0, 1]`.
    pub fn get_coordinate(&self, position: f64) -> Result<Vector2> {
        check_position(position)?;
        let point = match self.circle_center {
            None => self.left_end * (1.0 - position) + self.right_end * position,
            Some(center) => {
                let left_phase = (self.left_end - center).phase();
                let right_phase = (self.right_end - center).phase();
                let phase = left_phase * (1.0 - position) + right_phase * position;
                center + Vector2::from_polar(self.spec.radius(), phase)
            }
        };
        Ok(point)
    }

    /// Direction of the surface normal at `point`, pointing away from the viewer.
    fn normal_phase(&self, point: &Vector2) -> f64 {
        match self.circle_center {
            None => (self.chord_direction() - FRAC_PI_2).rem_euclid(TAU),
            Some(center) => (point - center).phase(),
        }
    }

    /// Point at `position` and the signed angle between the viewer's line of
    /// sight to that point and the local surface normal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PositionOutOfRange` if `position` is outside `[0, 1]`.
    pub fn viewing_angle(&self, position: f64, unit: AngleUnit) -> Result<(Vector2, f64)> {
        let point = self.get_coordinate(position)?;
        let angle = point.phase() - self.normal_phase(&point);
        Ok((point, unit.convert_radians(angle)))
    }
}
