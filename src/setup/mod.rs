mod placement;

use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, Result, ValidationError};
use crate::geometry::{MonitorSpec, PlacedMonitor};
use crate::units::{Length, LengthUnit};

use placement::Placement;

/// How monitors beyond the middle one are oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignmentMode {
    /// Each monitor individually faces the viewer squarely.
    #[default]
    Perpendicular,
    /// Monitors are chained with continuous tangent, approximating one
    /// seamless curve.
    Smooth,
}

impl FromStr for AlignmentMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "perpendicular" => Ok(AlignmentMode::Perpendicular),
            "smooth" => Ok(AlignmentMode::Smooth),
            _ => Err(ValidationError::UnknownAlignmentMode(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentMode::Perpendicular => f.write_str("perpendicular"),
            AlignmentMode::Smooth => f.write_str("smooth"),
        }
    }
}

/// Monitors placed left to right around a viewer at the origin.
///
/// A `Setup` is never edited in place: any change of input builds a new one.
/// Adjacent monitors share an edge, `monitors[i].right_end() == monitors[i + 1].left_end()`.
#[derive(Debug, Clone)]
pub struct Setup {
    viewing_distance: f64,
    mode: AlignmentMode,
    monitors: Vec<PlacedMonitor>,
}

impl Setup {
    /// Places `monitors` (ordered left to right) around the viewer.
    ///
    /// # Errors
    ///
    /// - `ValidationError::NoMonitors` if `monitors` is empty
    /// - `ValidationError::NonPositive` if the viewing distance is not positive
    /// - `DomainError::MonitorTooWide` if a perpendicular placement is infeasible
    pub fn new(
        monitors: &[MonitorSpec],
        viewing_distance: Length,
        mode: AlignmentMode,
    ) -> Result<Self> {
        let distance = viewing_distance.to_cm();
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ValidationError::NonPositive {
                parameter: "viewing distance",
                value: distance,
            }
            .into());
        }
        let placed = Placement::new(monitors, distance, mode).execute()?;
        Ok(Self {
            viewing_distance: distance,
            mode,
            monitors: placed,
        })
    }

    /// Like [`Setup::new`], with the mode and distance unit given as tokens.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown mode or unit token, then
    /// anything [`Setup::new`] returns.
    pub fn from_tokens(
        monitors: &[MonitorSpec],
        viewing_distance: f64,
        mode: &str,
        distance_unit: &str,
    ) -> Result<Self> {
        let distance = Length::from_token(viewing_distance, distance_unit)?;
        Self::new(monitors, distance, mode.parse()?)
    }

    /// Viewing distance in centimeters.
    #[must_use]
    pub fn viewing_distance(&self) -> f64 {
        self.viewing_distance
    }

    #[must_use]
    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// Placed monitors, left to right.
    #[must_use]
    pub fn monitors(&self) -> &[PlacedMonitor] {
        &self.monitors
    }

    /// Total surface width of all monitors.
    #[must_use]
    pub fn screen_width(&self, unit: LengthUnit) -> f64 {
        let total: f64 = self.monitors.iter().map(|m| m.spec().arc_width()).sum();
        unit.convert_cm(total)
    }

    /// Height of the tallest monitor.
    #[must_use]
    pub fn max_height(&self, unit: LengthUnit) -> f64 {
        let tallest = self
            .monitors
            .iter()
            .map(|m| m.spec().height())
            .fold(0.0, f64::max);
        unit.convert_cm(tallest)
    }

    /// Total visible area, in `unit` squared.
    #[must_use]
    pub fn display_area(&self, unit: LengthUnit) -> f64 {
        let total: f64 = self.monitors.iter().map(|m| m.spec().display_area()).sum();
        unit.convert_cm2(total)
    }

    /// The three summary metrics in one value.
    #[must_use]
    pub fn summary(&self, unit: LengthUnit) -> SetupSummary {
        SetupSummary {
            screen_width: self.screen_width(unit),
            max_height: self.max_height(unit),
            display_area: self.display_area(unit),
            unit,
        }
    }
}

/// Size metrics of a setup used to compare alternatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetupSummary {
    /// Sum of all monitors' arc widths.
    pub screen_width: f64,
    /// Largest monitor height.
    pub max_height: f64,
    /// Sum of display areas, in `unit` squared.
    pub display_area: f64,
    pub unit: LengthUnit,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::DomainError;
    use crate::geometry::AspectRatio;
    use crate::math::Vector2;

    const TOL: f64 = 1e-9;

    fn flat_24() -> MonitorSpec {
        MonitorSpec::flat(Length::inches(24.0), AspectRatio::from_pair(16.0, 9.0).unwrap())
            .unwrap()
    }

    fn curved_34() -> MonitorSpec {
        MonitorSpec::curved(
            Length::inches(34.0),
            AspectRatio::from_pair(21.0, 9.0).unwrap(),
            Length::mm(1500.0),
        )
        .unwrap()
    }

    fn assert_contiguous(setup: &Setup) {
        for pair in setup.monitors().windows(2) {
            assert_abs_diff_eq!(pair[0].right_end(), pair[1].left_end(), epsilon = TOL);
        }
    }

    #[test]
    fn mode_tokens() {
        assert_eq!(
            "perpendicular".parse::<AlignmentMode>().unwrap(),
            AlignmentMode::Perpendicular
        );
        assert_eq!("smooth".parse::<AlignmentMode>().unwrap(), AlignmentMode::Smooth);
        assert!(matches!(
            "curvy".parse::<AlignmentMode>().unwrap_err(),
            LayoutError::Validation(ValidationError::UnknownAlignmentMode(_))
        ));
    }

    #[test]
    fn single_flat_monitor() {
        let spec = flat_24();
        let setup = Setup::new(&[spec], Length::cm(60.0), AlignmentMode::Perpendicular).unwrap();
        assert_eq!(setup.monitors().len(), 1);

        let m = &setup.monitors()[0];
        assert_relative_eq!(m.left_end().y, 60.0, epsilon = TOL);
        assert_relative_eq!(m.right_end().y, 60.0, epsilon = TOL);
        assert_relative_eq!(m.left_end().x, -m.right_end().x, epsilon = TOL);
        assert_relative_eq!(m.spec().chord_width(), m.spec().arc_width());
    }

    #[test]
    fn two_flat_monitors_perpendicular() {
        let spec = flat_24();
        let setup =
            Setup::new(&[spec, spec], Length::cm(60.0), AlignmentMode::Perpendicular).unwrap();
        assert_eq!(setup.monitors().len(), 2);
        assert_contiguous(&setup);

        // The rotated middle monitor's left edge sits on the viewing axis.
        let shared = setup.monitors()[1].left_end();
        assert!(shared.x.abs() < TOL, "x={}", shared.x);
        assert_relative_eq!(
            setup.screen_width(LengthUnit::Centimeter),
            2.0 * spec.arc_width(),
            epsilon = TOL
        );

        // Mirror images of each other about the viewing axis.
        let left = &setup.monitors()[0];
        let right = &setup.monitors()[1];
        assert_abs_diff_eq!(
            left.left_end(),
            Vector2::new(-right.right_end().x, right.right_end().y),
            epsilon = TOL
        );
    }

    #[test]
    fn perpendicular_monitors_keep_their_distance() {
        let spec = flat_24();
        let setup = Setup::new(
            &[spec, spec, spec],
            Length::cm(60.0),
            AlignmentMode::Perpendicular,
        )
        .unwrap();
        assert_contiguous(&setup);
        let edge_distance = setup.monitors()[1].left_end().norm();
        for m in setup.monitors() {
            assert_relative_eq!(m.left_end().norm(), edge_distance, epsilon = TOL);
            assert_relative_eq!(m.right_end().norm(), edge_distance, epsilon = TOL);
            assert_relative_eq!(
                (m.right_end() - m.left_end()).norm(),
                spec.chord_width(),
                epsilon = TOL
            );
        }
    }

    #[test]
    fn single_curved_monitor() {
        let setup =
            Setup::new(&[curved_34()], Length::cm(60.0), AlignmentMode::Smooth).unwrap();
        let m = &setup.monitors()[0];
        assert!(m.spec().depth() > 0.0);
        assert!(m.circle_center().is_some());
        let (_, angle) = m
            .viewing_angle(0.5, crate::units::AngleUnit::Degrees)
            .unwrap();
        assert!(angle.abs() < 1e-7, "angle={angle}");
    }

    #[test]
    fn count_is_preserved_for_every_mode_and_parity() {
        let spec = flat_24();
        for mode in [AlignmentMode::Perpendicular, AlignmentMode::Smooth] {
            for count in 1..=5 {
                let monitors = vec![spec; count];
                let setup = Setup::new(&monitors, Length::cm(80.0), mode).unwrap();
                assert_eq!(setup.monitors().len(), count, "mode={mode} count={count}");
                assert_contiguous(&setup);
            }
        }
    }

    #[test]
    fn smooth_even_layout_is_symmetric() {
        let spec = curved_34();
        let setup = Setup::new(&[spec, spec], Length::cm(70.0), AlignmentMode::Smooth).unwrap();
        assert_eq!(setup.monitors().len(), 2);
        let left = &setup.monitors()[0];
        let right = &setup.monitors()[1];
        assert_abs_diff_eq!(left.right_end(), Vector2::new(0.0, 70.0), epsilon = TOL);
        assert_abs_diff_eq!(
            left.left_end(),
            Vector2::new(-right.right_end().x, right.right_end().y),
            epsilon = TOL
        );
    }

    #[test]
    fn smooth_chain_of_curved_monitors_follows_one_circle() {
        // Identical curved monitors with the viewer at the curvature center
        // continue one circle of that radius.
        let spec = curved_34();
        let setup = Setup::new(
            &[spec, spec, spec],
            Length::mm(1500.0),
            AlignmentMode::Smooth,
        )
        .unwrap();
        assert_contiguous(&setup);
        for m in setup.monitors() {
            assert_abs_diff_eq!(m.circle_center().unwrap(), Vector2::zeros(), epsilon = 1e-7);
        }
    }

    #[test]
    fn smooth_flat_chain_is_tangent_continuous() {
        // Flat monitors in smooth mode continue the middle monitor's line.
        let spec = flat_24();
        let setup = Setup::new(
            &[spec, spec, spec],
            Length::cm(60.0),
            AlignmentMode::Smooth,
        )
        .unwrap();
        for m in setup.monitors() {
            assert_relative_eq!(m.left_end().y, 60.0, epsilon = TOL);
            assert_relative_eq!(m.right_end().y, 60.0, epsilon = TOL);
        }
    }

    #[test]
    fn too_wide_monitor_fails_atomically() {
        let small = flat_24();
        let huge =
            MonitorSpec::flat(Length::inches(200.0), AspectRatio::from_pair(32.0, 9.0).unwrap())
                .unwrap();
        let result = Setup::new(
            &[huge, small, huge],
            Length::cm(40.0),
            AlignmentMode::Perpendicular,
        );
        assert!(matches!(
            result.unwrap_err(),
            LayoutError::Domain(DomainError::MonitorTooWide { .. })
        ));
    }

    #[test]
    fn empty_setup_is_rejected() {
        let err = Setup::new(&[], Length::cm(60.0), AlignmentMode::Smooth).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Validation(ValidationError::NoMonitors)
        ));
    }

    #[test]
    fn token_constructor_validates() {
        let spec = flat_24();
        assert!(matches!(
            Setup::from_tokens(&[spec], 60.0, "diagonal", "cm").unwrap_err(),
            LayoutError::Validation(ValidationError::UnknownAlignmentMode(_))
        ));
        assert!(matches!(
            Setup::from_tokens(&[spec], 60.0, "smooth", "yd").unwrap_err(),
            LayoutError::Validation(ValidationError::UnknownLengthUnit(_))
        ));
        assert!(Setup::from_tokens(&[spec], -1.0, "smooth", "cm").is_err());

        let setup = Setup::from_tokens(&[spec], 0.6, "perpendicular", "m").unwrap();
        assert_relative_eq!(setup.viewing_distance(), 60.0, epsilon = TOL);
    }

    #[test]
    fn metrics_round_trip_units() {
        let setup = Setup::new(
            &[flat_24(), curved_34()],
            Length::cm(60.0),
            AlignmentMode::Perpendicular,
        )
        .unwrap();
        assert_relative_eq!(
            setup.screen_width(LengthUnit::Inch) * 2.54,
            setup.screen_width(LengthUnit::Centimeter),
            epsilon = TOL
        );
        assert_relative_eq!(
            setup.display_area(LengthUnit::Meter) * 10_000.0,
            setup.display_area(LengthUnit::Centimeter),
            epsilon = 1e-6
        );

        let summary = setup.summary(LengthUnit::Centimeter);
        assert_relative_eq!(summary.max_height, flat_24().height().max(curved_34().height()));
        assert_relative_eq!(
            summary.display_area,
            flat_24().display_area() + curved_34().display_area(),
            epsilon = 1e-6
        );
    }
}
