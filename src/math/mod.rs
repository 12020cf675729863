mod polar;

pub use polar::Polar;

/// 2D point/vector type. Positions are expressed as vectors from the viewer.
pub type Vector2 = nalgebra::Vector2<f64>;
