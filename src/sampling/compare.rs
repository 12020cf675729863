use crate::error::{Result, ValidationError};
use crate::setup::{Setup, SetupSummary};
use crate::units::LengthUnit;

use super::{LineSegments, SamplingParams};

/// Default total number of segments shared among a setup's monitors.
pub const DEFAULT_TOTAL_SEGMENTS: usize = 200;

/// Side-by-side data for comparing alternative setups.
///
/// Every setup gets roughly the same number of segments in total, and all of
/// them share one angle range so they can be drawn against a single color bar.
#[derive(Debug, Clone)]
pub struct SetupComparison {
    /// Segments per setup, in input order.
    pub segments: Vec<LineSegments>,
    /// Size metrics per setup, in centimeters.
    pub summaries: Vec<SetupSummary>,
    /// Smallest and largest angle over all setups.
    pub angle_range: (f64, f64),
}

impl SetupComparison {
    /// Samples each setup with `total_segments / monitor_count` segments per
    /// monitor (at least one).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoMonitors`] if `setups` is empty, or any
    /// sampling error.
    pub fn new(setups: &[&Setup], total_segments: usize, params: SamplingParams) -> Result<Self> {
        if setups.is_empty() {
            return Err(ValidationError::NoMonitors.into());
        }

        let mut segments = Vec::with_capacity(setups.len());
        let mut summaries = Vec::with_capacity(setups.len());
        let mut angle_range = (f64::INFINITY, f64::NEG_INFINITY);
        for setup in setups {
            let per_monitor = (total_segments / setup.monitors().len()).max(1);
            let data = setup.line_segments(per_monitor, params)?;
            if let Some((min, max)) = data.angle_range() {
                angle_range = (angle_range.0.min(min), angle_range.1.max(max));
            }
            segments.push(data);
            summaries.push(setup.summary(LengthUnit::Centimeter));
        }

        Ok(Self {
            segments,
            summaries,
            angle_range,
        })
    }
}
