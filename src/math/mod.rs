//! Spatial transform library: vectors, quaternions, and 4×4 matrices.
//!
//! All types are small `Copy` values in `f32`. Matrices are column-major
//! so they can be uploaded to the GPU without transposition, and every
//! type converts to and from its `glam` counterpart.

/// Column-major 4×4 transform matrix.
pub mod matrix;
/// Axis-angle rotation quaternion.
pub mod quaternion;
/// Three-component vector algebra.
pub mod vector;

pub use matrix::Matrix4;
pub use quaternion::Quaternion;
pub use vector::Vector3;

/// Reciprocal square root, `1 / sqrt(x)`.
#[inline]
pub fn rsqrt(x: f32) -> f32 {
    x.sqrt().recip()
}

/// Approximate reciprocal square root via the bit-level initial guess,
/// refined with two Newton-Raphson steps.
///
/// Agrees with [`rsqrt`] to roughly 5e-6 relative error for positive
/// normal inputs. Zero maps to a large finite value rather than infinity,
/// so callers that need the exact singular behavior should use [`rsqrt`].
#[inline]
pub fn fast_rsqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let mut y = f32::from_bits(0x5f37_59df - (x.to_bits() >> 1));
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}
