// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
mod util;

pub use interval::Interval;
pub use ray::{Ray, DELTA};
pub use util::{align_zero, is_zero, unit, MathError, MathResult, EPSILON};
