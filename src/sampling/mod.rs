//! Viewing-angle sampling over a placed setup.
//!
//! Samples are returned as parallel columns (monitor index, x, y, angle), the
//! shape a color-mapped plot consumes directly.

mod compare;

pub use compare::{SetupComparison, DEFAULT_TOTAL_SEGMENTS};

use crate::error::{Result, ValidationError};
use crate::setup::Setup;
use crate::units::AngleUnit;

/// Default number of sample points per monitor.
pub const DEFAULT_SAMPLES_PER_MONITOR: usize = 100;

/// Default number of line segments per monitor.
pub const DEFAULT_SEGMENTS_PER_MONITOR: usize = DEFAULT_SAMPLES_PER_MONITOR - 1;

/// Parameters controlling how viewing angles are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingParams {
    /// Report angle magnitudes only.
    pub abs_angle: bool,
    /// Unit of reported angles.
    pub angle_unit: AngleUnit,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            abs_angle: true,
            angle_unit: AngleUnit::Degrees,
        }
    }
}

impl SamplingParams {
    #[must_use]
    pub fn with_abs_angle(mut self, abs_angle: bool) -> Self {
        self.abs_angle = abs_angle;
        self
    }

    #[must_use]
    pub fn with_angle_unit(mut self, angle_unit: AngleUnit) -> Self {
        self.angle_unit = angle_unit;
        self
    }
}

/// Per-point viewing angles, in monitor order then position order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewingAngleSamples {
    pub monitor: Vec<usize>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub viewing_angle: Vec<f64>,
}

impl ViewingAngleSamples {
    #[must_use]
    pub fn len(&self) -> usize {
        self.monitor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monitor.is_empty()
    }

    /// Smallest and largest sampled angle, `None` when empty.
    #[must_use]
    pub fn angle_range(&self) -> Option<(f64, f64)> {
        angle_range(&self.viewing_angle)
    }

    fn push(&mut self, monitor: usize, x: f64, y: f64, angle: f64) {
        self.monitor.push(monitor);
        self.x.push(x);
        self.y.push(y);
        self.viewing_angle.push(angle);
    }
}

/// Line segments between consecutive samples of the same monitor.
///
/// Each segment carries the mean of its two endpoint angles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSegments {
    pub monitor: Vec<usize>,
    pub x: Vec<[f64; 2]>,
    pub y: Vec<[f64; 2]>,
    pub viewing_angle: Vec<f64>,
}

impl LineSegments {
    #[must_use]
    pub fn len(&self) -> usize {
        self.monitor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monitor.is_empty()
    }

    /// Smallest and largest segment angle, `None` when empty.
    #[must_use]
    pub fn angle_range(&self) -> Option<(f64, f64)> {
        angle_range(&self.viewing_angle)
    }

    /// Folds consecutive samples of the same monitor into segments. The fold
    /// restarts at every change of monitor index.
    fn from_samples(samples: &ViewingAngleSamples) -> Self {
        let mut segments = Self::default();
        for i in 1..samples.len() {
            let (prev, curr) = (i - 1, i);
            if samples.monitor[prev] != samples.monitor[curr] {
                continue;
            }
            segments.monitor.push(samples.monitor[curr]);
            segments.x.push([samples.x[prev], samples.x[curr]]);
            segments.y.push([samples.y[prev], samples.y[curr]]);
            segments
                .viewing_angle
                .push((samples.viewing_angle[prev] + samples.viewing_angle[curr]) / 2.0);
        }
        segments
    }
}

fn angle_range(angles: &[f64]) -> Option<(f64, f64)> {
    if angles.is_empty() {
        return None;
    }
    let min = angles.iter().copied().fold(f64::INFINITY, f64::min);
    let max = angles.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

impl Setup {
    /// Samples `samples_per_monitor` evenly spaced positions over `[0, 1]`
    /// (both edges included) on every monitor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooFewSamples`] if fewer than 2 samples are requested.
    pub fn viewing_angles(
        &self,
        samples_per_monitor: usize,
        params: SamplingParams,
    ) -> Result<ViewingAngleSamples> {
        if samples_per_monitor < 2 {
            return Err(ValidationError::TooFewSamples {
                requested: samples_per_monitor,
                minimum: 2,
            }
            .into());
        }

        let mut samples = ViewingAngleSamples::default();
        #[allow(clippy::cast_precision_loss)]
        let last = (samples_per_monitor - 1) as f64;
        for (index, monitor) in self.monitors().iter().enumerate() {
            for i in 0..samples_per_monitor {
                #[allow(clippy::cast_precision_loss)]
                let position = i as f64 / last;
                let (point, angle) = monitor.viewing_angle(position, params.angle_unit)?;
                let angle = if params.abs_angle { angle.abs() } else { angle };
                samples.push(index, point.x, point.y, angle);
            }
        }
        Ok(samples)
    }

    /// Splits every monitor into `segments_per_monitor` line segments.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooFewSamples`] if `segments_per_monitor` is zero.
    pub fn line_segments(
        &self,
        segments_per_monitor: usize,
        params: SamplingParams,
    ) -> Result<LineSegments> {
        let samples = self.viewing_angles(segments_per_monitor.saturating_add(1), params)?;
        Ok(LineSegments::from_samples(&samples))
    }
}
