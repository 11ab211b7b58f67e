//! Floating point helpers shared by the geometry and shading code.

use crate::Vec3;
use thiserror::Error;

/// Values closer to zero than this are treated as zero.
pub const EPSILON: f32 = 1e-5;

/// Errors raised by vector operations that need a non-zero operand.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid operand: {0}")]
    InvalidOperand(&'static str),
}

pub type MathResult<T> = Result<T, MathError>;

/// Returns true if `x` is within [`EPSILON`] of zero.
#[inline]
pub fn is_zero(x: f32) -> bool {
    x.abs() < EPSILON
}

/// Snaps values within [`EPSILON`] of zero to exactly zero.
///
/// Sign tests on dot products go through this so that grazing angles
/// compare equal to zero instead of flipping sign on rounding noise.
#[inline]
pub fn align_zero(x: f32) -> f32 {
    if is_zero(x) {
        0.0
    } else {
        x
    }
}

/// Normalize `v`, failing on a zero-length vector.
pub fn unit(v: Vec3) -> MathResult<Vec3> {
    v.try_normalize()
        .ok_or(MathError::InvalidOperand("zero-length vector cannot be normalized"))
}
