//! Placement of an ordered monitor list around the viewer.
//!
//! The middle monitor is placed first, centered on the viewing axis at the
//! viewing distance. Remaining monitors are attached outward one at a time,
//! left side innermost-to-outermost, then right side, each with its inner
//! edge pinned to its neighbour's outer edge.
//!
//! Middle selection:
//! - odd count: `monitors[n / 2]`, unrotated
//! - even count, perpendicular: `monitors[n / 2]`, rotated by half its angular
//!   width so its left edge lies on the viewing axis
//! - even count, smooth: a zero-width placeholder, removed once all real
//!   monitors are placed
//!
//! Each side is assembled as its own stack and the stacks are joined once
//! every monitor is placed.

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, debug_span, warn};

use crate::error::{DomainError, Result, ValidationError};
use crate::geometry::{MonitorSpec, PlacedMonitor};
use crate::math::{Polar, Vector2};

use super::AlignmentMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of phase changes moving outward on this side.
    fn outward(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Places monitors around a viewer at the origin.
pub(super) struct Placement<'a> {
    monitors: &'a [MonitorSpec],
    viewing_distance: f64,
    mode: AlignmentMode,
}

impl<'a> Placement<'a> {
    /// `viewing_distance` is in centimeters.
    pub(super) fn new(
        monitors: &'a [MonitorSpec],
        viewing_distance: f64,
        mode: AlignmentMode,
    ) -> Self {
        Self {
            monitors,
            viewing_distance,
            mode,
        }
    }

    /// Runs the placement, returning the monitors left to right.
    ///
    /// Either every monitor is placed or an error is returned.
    pub(super) fn execute(&self) -> Result<Vec<PlacedMonitor>> {
        let n = self.monitors.len();
        if n == 0 {
            return Err(ValidationError::NoMonitors.into());
        }
        let _span = debug_span!("placement", monitors = n, mode = %self.mode).entered();

        let half = n / 2;
        let even = n % 2 == 0;
        let uses_placeholder = even && self.mode == AlignmentMode::Smooth;

        let (middle, right_start) = if uses_placeholder {
            (MonitorSpec::placeholder(), half)
        } else {
            (self.monitors[half], half + 1)
        };
        let rotate = even && self.mode == AlignmentMode::Perpendicular;

        let middle = self.place_middle(middle, rotate);

        // Each side is a stack growing outward from the middle monitor.
        let mut left: Vec<PlacedMonitor> = Vec::with_capacity(half);
        for spec in self.monitors[..half].iter().rev() {
            let adjacent = left.last().unwrap_or(&middle);
            let monitor = self.place_outward(*spec, adjacent, Side::Left)?;
            left.push(monitor);
        }
        let mut right: Vec<PlacedMonitor> = Vec::with_capacity(n - right_start);
        for spec in &self.monitors[right_start..] {
            let adjacent = right.last().unwrap_or(&middle);
            let monitor = self.place_outward(*spec, adjacent, Side::Right)?;
            right.push(monitor);
        }

        let middle = (!uses_placeholder).then_some(middle);
        Ok(left
            .into_iter()
            .rev()
            .chain(middle)
            .chain(right)
            .collect())
    }

    /// Places `spec` centered on the viewing axis with its surface touching
    /// the viewing distance.
    fn place_middle(&self, spec: MonitorSpec, rotate: bool) -> PlacedMonitor {
        let half_width = spec.chord_width() / 2.0;
        let chord_distance = self.viewing_distance - spec.depth();
        let mut left_end = Vector2::new(-half_width, chord_distance);
        let mut right_end = Vector2::new(half_width, chord_distance);

        if rotate {
            let half_angle = (half_width / self.viewing_distance).atan();
            left_end = left_end.rotated(-half_angle);
            right_end = right_end.rotated(-half_angle);
        }

        debug!(?left_end, ?right_end, rotate, "placed middle monitor");
        PlacedMonitor::new(spec, left_end, right_end)
    }

    /// Attaches `spec` to the outer edge of `adjacent` on `side`.
    fn place_outward(
        &self,
        spec: MonitorSpec,
        adjacent: &PlacedMonitor,
        side: Side,
    ) -> Result<PlacedMonitor> {
        let inner = match side {
            Side::Left => adjacent.left_end(),
            Side::Right => adjacent.right_end(),
        };
        let outer = match self.mode {
            AlignmentMode::Perpendicular => perpendicular_outer_edge(&spec, inner, side)?,
            AlignmentMode::Smooth => smooth_outer_edge(&spec, adjacent, inner, side)?,
        };

        debug!(?side, ?inner, ?outer, "placed monitor");
        let monitor = match side {
            Side::Left => PlacedMonitor::new(spec, outer, inner),
            Side::Right => PlacedMonitor::new(spec, inner, outer),
        };
        Ok(monitor)
    }
}

/// Outer edge at the same distance from the viewer as the inner edge, so the
/// monitor faces the viewer squarely.
fn perpendicular_outer_edge(spec: &MonitorSpec, inner: Vector2, side: Side) -> Result<Vector2> {
    let (end_distance, edge_phase) = inner.to_polar();
    let ratio = (spec.chord_width() / 2.0) / end_distance;
    if ratio.is_nan() || ratio.abs() > 1.0 {
        warn!(ratio, end_distance, "monitor does not fit at this distance");
        return Err(DomainError::MonitorTooWide { ratio }.into());
    }
    let half_angle = ratio.asin();
    Ok(Vector2::from_polar(
        end_distance,
        edge_phase + side.outward() * 2.0 * half_angle,
    ))
}

/// Outer edge continuing the tangent of `adjacent` across the shared edge.
fn smooth_outer_edge(
    spec: &MonitorSpec,
    adjacent: &PlacedMonitor,
    inner: Vector2,
    side: Side,
) -> Result<Vector2> {
    let curvature_diff = match side {
        Side::Left => adjacent.spec().arc_angle(0.0)? - spec.arc_angle(1.0)?,
        Side::Right => adjacent.spec().arc_angle(1.0)? - spec.arc_angle(0.0)?,
    };
    let monitor_phase = adjacent.midpoint().phase() + curvature_diff;
    let chord_phase = monitor_phase + side.outward() * FRAC_PI_2;
    Ok(inner + Vector2::from_polar(spec.chord_width(), chord_phase))
}
