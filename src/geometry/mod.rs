mod monitor;
mod placed;

pub use monitor::{AspectRatio, Curvature, MonitorSpec};
pub use placed::PlacedMonitor;

use crate::error::{Result, ValidationError};

/// Checks that a position along a monitor lies in `[0, 1]`.
///
/// `0` is the left edge, `1` the right edge. `NaN` is rejected.
pub(crate) fn check_position(position: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&position) {
        return Err(ValidationError::PositionOutOfRange { value: position }.into());
    }
    Ok(())
}
