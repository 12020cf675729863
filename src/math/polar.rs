//! Polar algebra on top of `nalgebra`'s 2D vectors.
//!
//! Phases follow `atan2` conventions: measured from the positive x-axis,
//! counter-clockwise, in `(-pi, pi]`.

use crate::error::{DomainError, Result};

use super::Vector2;

/// Polar construction, phase queries and checked scaling for 2D vectors.
pub trait Polar: Sized {
    /// Builds a vector from its length and phase.
    fn from_polar(radius: f64, phase: f64) -> Self;

    /// Angle of the vector from the positive x-axis.
    fn phase(&self) -> f64;

    /// Returns `(radius, phase)`.
    fn to_polar(&self) -> (f64, f64);

    /// Rotates the vector about the origin by `angle` radians
    /// (counter-clockwise for positive angles).
    ///
    /// Implemented as a polar round-trip: the phase is shifted, the length kept.
    fn rotated(&self, angle: f64) -> Self;

    /// Divides the vector by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] if `scalar` is zero.
    fn checked_div(&self, scalar: f64) -> Result<Self>;
}

impl Polar for Vector2 {
    fn from_polar(radius: f64, phase: f64) -> Self {
        Vector2::new(radius * phase.cos(), radius * phase.sin())
    }

    fn phase(&self) -> f64 {
        self.y.atan2(self.x)
    }

    fn to_polar(&self) -> (f64, f64) {
        (self.norm(), self.phase())
    }

    fn rotated(&self, angle: f64) -> Self {
        let (radius, phase) = self.to_polar();
        Self::from_polar(radius, phase + angle)
    }

    fn checked_div(&self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            return Err(DomainError::DivisionByZero.into());
        }
        Ok(self / scalar)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::LayoutError;

    const TOL: f64 = 1e-12;

    #[test]
    fn from_polar_on_axes() {
        let v = Vector2::from_polar(2.0, FRAC_PI_2);
        assert!(v.x.abs() < TOL, "x={}", v.x);
        assert!((v.y - 2.0).abs() < TOL, "y={}", v.y);

        let w = Vector2::from_polar(3.0, PI);
        assert!((w.x + 3.0).abs() < TOL, "x={}", w.x);
        assert!(w.y.abs() < TOL, "y={}", w.y);
    }

    #[test]
    fn to_polar_inverts_from_polar() {
        let v = Vector2::new(1.0, 1.0);
        let (r, phase) = v.to_polar();
        assert_relative_eq!(r, 2.0_f64.sqrt(), epsilon = TOL);
        assert_relative_eq!(phase, FRAC_PI_4, epsilon = TOL);
    }

    #[test]
    fn phase_of_negative_x_axis_is_pi() {
        let v = Vector2::new(-1.0, 0.0);
        assert_relative_eq!(v.phase(), PI, epsilon = TOL);
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vector2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert_relative_eq!(v, Vector2::new(0.0, 1.0), epsilon = TOL);

        let w = Vector2::new(0.0, 5.0).rotated(-FRAC_PI_2);
        assert_relative_eq!(w, Vector2::new(5.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn rotation_preserves_norm() {
        let v = Vector2::new(3.0, 4.0);
        let rotated = v.rotated(0.7);
        assert_relative_eq!(rotated.norm(), 5.0, epsilon = TOL);
        assert_relative_eq!(v.dot(&rotated), 25.0 * 0.7_f64.cos(), epsilon = 1e-10);
    }

    #[test]
    fn checked_div_scales() {
        let v = Vector2::new(4.0, -2.0).checked_div(2.0).unwrap();
        assert_relative_eq!(v, Vector2::new(2.0, -1.0), epsilon = TOL);
    }

    #[test]
    fn checked_div_by_zero_fails() {
        let err = Vector2::new(1.0, 1.0).checked_div(0.0).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Domain(DomainError::DivisionByZero)
        ));
    }
}
