use std::f32::consts::TAU;

use glam::Quat;

use super::Vector3;

/// Rotation quaternion `(x, y, z, w)`.
///
/// Only ever built from an axis and an angle (or as the identity), so a
/// freshly constructed quaternion is unit length. Algebraic mutation does
/// not renormalize; call [`Quaternion::normalize`] after accumulating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// Vector part, X.
    pub x: f32,
    /// Vector part, Y.
    pub y: f32,
    /// Vector part, Z.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `degrees` about `axis`.
    pub fn from_axis_angle(axis: Vector3, degrees: f32) -> Self {
        Self::from_axis_angle_rad(axis, degrees.to_radians())
    }

    /// Rotation of `radians` about `axis`.
    ///
    /// The angle is reduced into `[0, 2π)` before the half-angle sine and
    /// cosine are taken. A zero-length axis yields the identity.
    pub fn from_axis_angle_rad(axis: Vector3, radians: f32) -> Self {
        let length = axis.length();
        if length == 0.0 {
            return Self::IDENTITY;
        }

        let inv = length.recip();
        let angle = if radians < 0.0 {
            TAU - radians.abs() % TAU
        } else {
            radians % TAU
        };
        let (sin, cos) = (angle / 2.0).sin_cos();

        let mut q = Self::new(
            inv * axis.x * sin,
            inv * axis.y * sin,
            inv * axis.z * sin,
            cos,
        );
        let _ = q.normalize();
        q
    }

    /// Reset to the identity rotation.
    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Squared magnitude.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Scale to unit magnitude in place. A zero quaternion is left as is.
    pub fn normalize(&mut self) -> &mut Self {
        let len2 = self.length_squared();
        if len2 != 0.0 {
            let len = len2.sqrt();
            self.x /= len;
            self.y /= len;
            self.z /= len;
            self.w /= len;
        }
        self
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}
