use thiserror::Error;

/// Top-level error type for the monitor layout engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Caller-input mistakes, reported before any geometry is computed.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("unknown length unit `{0}`, expected one of: mm, cm, m, in, ft")]
    UnknownLengthUnit(String),

    #[error("unknown angle unit `{0}`, expected degrees or radians")]
    UnknownAngleUnit(String),

    #[error("unknown alignment mode `{0}`, expected perpendicular or smooth")]
    UnknownAlignmentMode(String),

    #[error("position {value} is out of range [0, 1] (0 = left edge, 1 = right edge)")]
    PositionOutOfRange { value: f64 },

    #[error("{parameter} must be positive and finite, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("invalid aspect ratio `{0}`, expected a ratio or width:height")]
    InvalidAspectRatio(String),

    #[error("invalid length `{0}`, expected a number followed by a unit")]
    InvalidLength(String),

    #[error("a setup needs at least one monitor")]
    NoMonitors,

    #[error("{requested} samples per monitor requested, at least {minimum} required")]
    TooFewSamples { requested: usize, minimum: usize },

    #[error("{requested} monitors requested, between 1 and {max} supported")]
    MonitorCountOutOfRange { requested: usize, max: usize },

    #[error("monitor index {index} is out of range for {count} monitors")]
    MonitorIndexOutOfRange { index: usize, count: usize },
}

/// Physically infeasible configurations and arithmetic failures.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error(
        "monitor is too wide for its distance from the viewer \
         (half chord / edge distance = {ratio})"
    )]
    MonitorTooWide { ratio: f64 },

    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience type alias for results using [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;
