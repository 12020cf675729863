pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod sampling;
pub mod setup;
pub mod units;

pub use config::SetupConfig;
pub use error::{DomainError, LayoutError, Result, ValidationError};
pub use geometry::{AspectRatio, Curvature, MonitorSpec, PlacedMonitor};
pub use sampling::{LineSegments, SamplingParams, SetupComparison, ViewingAngleSamples};
pub use setup::{AlignmentMode, Setup, SetupSummary};
pub use units::{AngleUnit, Length, LengthUnit};
