//! Caller-facing configuration of a desk setup.
//!
//! A [`SetupConfig`] is the value an interactive front end edits. Each edit
//! produces a new configuration, and [`SetupConfig::build`] turns it into a
//! freshly placed [`Setup`].

use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::geometry::{AspectRatio, Curvature, MonitorSpec};
use crate::setup::{AlignmentMode, Setup};
use crate::units::Length;

/// Monitor used when a configuration grows and no other is given:
/// a flat 24 in 16:9 panel.
#[must_use]
pub fn default_monitor() -> MonitorSpec {
    MonitorSpec::from_raw(Length::inches(24.0).to_cm(), 16.0 / 9.0, Curvature::Flat)
}

/// Ordered monitors, viewing distance and alignment mode of a desk setup.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupConfig {
    monitors: Vec<MonitorSpec>,
    viewing_distance: Length,
    mode: AlignmentMode,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            monitors: vec![default_monitor(); 2],
            viewing_distance: Length::cm(60.0),
            mode: AlignmentMode::Perpendicular,
        }
    }
}

impl SetupConfig {
    /// Largest number of monitors a configuration holds.
    pub const MAX_MONITORS: usize = 5;

    /// Creates a configuration from an explicit monitor list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoMonitors`] if `monitors` is empty.
    pub fn new(
        monitors: Vec<MonitorSpec>,
        viewing_distance: Length,
        mode: AlignmentMode,
    ) -> Result<Self> {
        if monitors.is_empty() {
            return Err(ValidationError::NoMonitors.into());
        }
        Ok(Self {
            monitors,
            viewing_distance,
            mode,
        })
    }

    #[must_use]
    pub fn monitors(&self) -> &[MonitorSpec] {
        &self.monitors
    }

    #[must_use]
    pub fn viewing_distance(&self) -> Length {
        self.viewing_distance
    }

    #[must_use]
    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AlignmentMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_viewing_distance(mut self, viewing_distance: Length) -> Self {
        self.viewing_distance = viewing_distance;
        self
    }

    /// Resizes the monitor list. Growing repeats the rightmost monitor,
    /// shrinking drops monitors from the right.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MonitorCountOutOfRange`] unless
    /// `1 <= count <= MAX_MONITORS`.
    pub fn with_monitor_count(mut self, count: usize) -> Result<Self> {
        if count == 0 || count > Self::MAX_MONITORS {
            return Err(ValidationError::MonitorCountOutOfRange {
                requested: count,
                max: Self::MAX_MONITORS,
            }
            .into());
        }
        let last = self.monitors.last().copied().unwrap_or_else(default_monitor);
        self.monitors.resize(count, last);
        Ok(self)
    }

    /// Replaces the monitor at `index` (0 = leftmost).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MonitorIndexOutOfRange`] for an invalid index.
    pub fn with_monitor(mut self, index: usize, monitor: MonitorSpec) -> Result<Self> {
        let count = self.monitors.len();
        let slot = self
            .monitors
            .get_mut(index)
            .ok_or(ValidationError::MonitorIndexOutOfRange { index, count })?;
        *slot = monitor;
        Ok(self)
    }

    /// Replaces every monitor with copies of `monitor`.
    #[must_use]
    pub fn with_all_monitors(mut self, monitor: MonitorSpec) -> Self {
        self.monitors.fill(monitor);
        self
    }

    /// Places the configured monitors.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Setup::new`].
    pub fn build(&self) -> Result<Setup> {
        debug!(
            monitors = self.monitors.len(),
            distance = %self.viewing_distance,
            mode = %self.mode,
            "building setup"
        );
        Setup::new(&self.monitors, self.viewing_distance, self.mode)
    }
}

/// Builds a monitor from the controls an interactive front end exposes:
/// size in inches, a `width:height` aspect pair and an optional radius in
/// millimeters (`None` for flat).
///
/// # Errors
///
/// Returns a validation error for non-positive values.
pub fn monitor_from_controls(
    size_inches: f64,
    aspect_width: f64,
    aspect_height: f64,
    radius_mm: Option<f64>,
) -> Result<MonitorSpec> {
    let curvature = match radius_mm {
        None => Curvature::Flat,
        Some(radius) => Curvature::from_radius(Length::mm(radius))?,
    };
    MonitorSpec::new(
        Length::inches(size_inches),
        AspectRatio::from_pair(aspect_width, aspect_height)?,
        curvature,
    )
}
