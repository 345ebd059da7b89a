use glam::Mat4;

use super::{Quaternion, Vector3};
use crate::error::BulbError;

// Element indices in the column-major array, named `M{row}{column}`.
const M00: usize = 0;
const M10: usize = 1;
const M20: usize = 2;
const M30: usize = 3;
const M01: usize = 4;
const M11: usize = 5;
const M21: usize = 6;
const M31: usize = 7;
const M02: usize = 8;
const M12: usize = 9;
const M22: usize = 10;
const M32: usize = 11;
const M03: usize = 12;
const M13: usize = 13;
const M23: usize = 14;
const M33: usize = 15;

/// 4×4 transform stored column-major, ready for GPU upload.
///
/// The `set_to_*` builders overwrite the whole matrix and return
/// `&mut Self`; [`Matrix4::mul`] post-multiplies in place, so
/// `a.mul(&b)` leaves `a · b` in `a`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix4 {
    val: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// The multiplicative identity.
    pub const IDENTITY: Self = Self {
        val: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// All elements zero.
    pub const ZERO: Self = Self { val: [0.0; 16] };

    /// Build from 16 column-major values.
    #[inline]
    pub const fn from_cols_array(val: [f32; 16]) -> Self {
        Self { val }
    }

    /// Borrow the 16 column-major values.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.val
    }

    /// Copy out the 16 column-major values.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.val
    }

    /// Copy out as four columns, the layout GPU uniform structs expect.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let v = &self.val;
        [
            [v[0], v[1], v[2], v[3]],
            [v[4], v[5], v[6], v[7]],
            [v[8], v[9], v[10], v[11]],
            [v[12], v[13], v[14], v[15]],
        ]
    }

    /// Element at `row`, `column` (both `0..4`).
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.val[column * 4 + row]
    }

    /// Reset to the identity.
    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Copy every element from `other`.
    pub fn set(&mut self, other: &Self) -> &mut Self {
        self.val = other.val;
        self
    }

    /// Set to the rotation described by `quat`, with no translation.
    pub fn set_from_quaternion(&mut self, quat: Quaternion) -> &mut Self {
        self.set_from_translation_rotation(Vector3::ZERO, quat)
    }

    /// Set to a rotation by `quat` followed by a translation by
    /// `translation`.
    pub fn set_from_translation_rotation(
        &mut self,
        translation: Vector3,
        quat: Quaternion,
    ) -> &mut Self {
        let xs = quat.x * 2.0;
        let ys = quat.y * 2.0;
        let zs = quat.z * 2.0;
        let (wx, wy, wz) = (quat.w * xs, quat.w * ys, quat.w * zs);
        let (xx, xy, xz) = (quat.x * xs, quat.x * ys, quat.x * zs);
        let (yy, yz, zz) = (quat.y * ys, quat.y * zs, quat.z * zs);

        let v = &mut self.val;
        v[M00] = 1.0 - (yy + zz);
        v[M01] = xy - wz;
        v[M02] = xz + wy;
        v[M03] = translation.x;

        v[M10] = xy + wz;
        v[M11] = 1.0 - (xx + zz);
        v[M12] = yz - wx;
        v[M13] = translation.y;

        v[M20] = xz - wy;
        v[M21] = yz + wx;
        v[M22] = 1.0 - (xx + yy);
        v[M23] = translation.z;

        v[M30] = 0.0;
        v[M31] = 0.0;
        v[M32] = 0.0;
        v[M33] = 1.0;
        self
    }

    /// Right-handed perspective projection with OpenGL clip depth
    /// (`[-1, 1]`).
    ///
    /// `fovy` is the vertical field of view in degrees. `near` and `far`
    /// are expected to be positive distances.
    pub fn set_to_projection(
        &mut self,
        near: f32,
        far: f32,
        fovy: f32,
        aspect: f32,
    ) -> &mut Self {
        let focal = (fovy.to_radians() / 2.0).tan().recip();
        let a1 = (far + near) / (near - far);
        let a2 = (2.0 * far * near) / (near - far);

        *self = Self::ZERO;
        let v = &mut self.val;
        v[M00] = focal / aspect;
        v[M11] = focal;
        v[M22] = a1;
        v[M32] = -1.0;
        v[M23] = a2;
        self
    }

    /// Pure translation by `v`.
    pub fn set_to_translation(&mut self, v: Vector3) -> &mut Self {
        self.set_to_translation_xyz(v.x, v.y, v.z)
    }

    /// Pure translation by `(x, y, z)`.
    pub fn set_to_translation_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self = Self::IDENTITY;
        self.val[M03] = x;
        self.val[M13] = y;
        self.val[M23] = z;
        self
    }

    /// Rotation of `degrees` about `axis`. Zero degrees is the identity.
    pub fn set_to_rotation(&mut self, axis: Vector3, degrees: f32) -> &mut Self {
        if degrees == 0.0 {
            return self.identity();
        }
        self.set_from_quaternion(Quaternion::from_axis_angle(axis, degrees))
    }

    /// Rotation of `degrees` about `(axis_x, axis_y, axis_z)`.
    pub fn set_to_rotation_xyz(
        &mut self,
        axis_x: f32,
        axis_y: f32,
        axis_z: f32,
        degrees: f32,
    ) -> &mut Self {
        self.set_to_rotation(Vector3::new(axis_x, axis_y, axis_z), degrees)
    }

    /// View rotation looking along `direction` with `up` as the vertical
    /// hint. The camera looks down its local -Z axis.
    ///
    /// `direction` and `up` must not be parallel: the right vector
    /// degenerates to zero and the resulting basis is not orthonormal.
    pub fn set_to_look_at_direction(
        &mut self,
        direction: Vector3,
        up: Vector3,
    ) -> &mut Self {
        let forward = direction.normalized();
        let right = Vector3::cross(forward, up).normalized();
        let true_up = Vector3::cross(right, forward).normalized();

        *self = Self::IDENTITY;
        let v = &mut self.val;
        v[M00] = right.x;
        v[M01] = right.y;
        v[M02] = right.z;
        v[M10] = true_up.x;
        v[M11] = true_up.y;
        v[M12] = true_up.z;
        v[M20] = -forward.x;
        v[M21] = -forward.y;
        v[M22] = -forward.z;
        self
    }

    /// View matrix for an eye at `position` looking at `target`.
    pub fn set_to_look_at(
        &mut self,
        position: Vector3,
        target: Vector3,
        up: Vector3,
    ) -> &mut Self {
        let _ = self.set_to_look_at_direction(target - position, up);
        let mut translation = Self::IDENTITY;
        let _ = translation.set_to_translation(-position);
        self.mul(&translation)
    }

    /// Determinant by cofactor expansion over 2×2 minors.
    pub fn determinant(&self) -> f32 {
        let m = Minors::of(&self.val);
        m.determinant()
    }

    /// Inverse, or [`BulbError::SingularMatrix`] when the determinant is
    /// exactly zero. No near-singular tolerance is applied.
    pub fn try_inverse(&self) -> Result<Self, BulbError> {
        // aCR: column C, row R.
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.val;
        let m = Minors::of(&self.val);
        let det = m.determinant();
        if det == 0.0 {
            return Err(BulbError::SingularMatrix { determinant: det });
        }
        let inv = det.recip();

        let out = [
            a11 * m.b11 - a12 * m.b10 + a13 * m.b09,
            a02 * m.b10 - a01 * m.b11 - a03 * m.b09,
            a31 * m.b05 - a32 * m.b04 + a33 * m.b03,
            a22 * m.b04 - a21 * m.b05 - a23 * m.b03,
            a12 * m.b08 - a10 * m.b11 - a13 * m.b07,
            a00 * m.b11 - a02 * m.b08 + a03 * m.b07,
            a32 * m.b02 - a30 * m.b05 - a33 * m.b01,
            a20 * m.b05 - a22 * m.b02 + a23 * m.b01,
            a10 * m.b10 - a11 * m.b08 + a13 * m.b06,
            a01 * m.b08 - a00 * m.b10 - a03 * m.b06,
            a30 * m.b04 - a31 * m.b02 + a33 * m.b00,
            a21 * m.b02 - a20 * m.b04 - a23 * m.b00,
            a11 * m.b07 - a10 * m.b09 - a12 * m.b06,
            a00 * m.b09 - a01 * m.b07 + a02 * m.b06,
            a31 * m.b01 - a30 * m.b03 - a32 * m.b00,
            a20 * m.b03 - a21 * m.b01 + a22 * m.b00,
        ];
        Ok(Self {
            val: out.map(|c| c * inv),
        })
    }

    /// Invert in place, reporting a singular matrix as an error.
    pub fn try_inv(&mut self) -> Result<&mut Self, BulbError> {
        *self = self.try_inverse()?;
        Ok(self)
    }

    /// Invert in place.
    ///
    /// # Panics
    ///
    /// Panics when the determinant is exactly zero. A singular transform
    /// reaching this point is a programming error in the caller; use
    /// [`Matrix4::try_inv`] where singular input is expected.
    #[allow(clippy::panic)]
    pub fn inv(&mut self) -> &mut Self {
        match self.try_inverse() {
            Ok(inverse) => {
                *self = inverse;
                self
            }
            Err(e) => {
                log::error!("{e}: {:?}", self.val);
                panic!("{e}");
            }
        }
    }

    /// Element-wise addition in place.
    pub fn add(&mut self, other: &Self) -> &mut Self {
        *self += *other;
        self
    }

    /// Post-multiply in place: `self = self · other`.
    pub fn mul(&mut self, other: &Self) -> &mut Self {
        *self *= *other;
        self
    }

    /// Transform a direction by the upper 3×3 block (no translation).
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let m = &self.val;
        Vector3::new(
            m[M00] * v.x + m[M01] * v.y + m[M02] * v.z,
            m[M10] * v.x + m[M11] * v.y + m[M12] * v.z,
            m[M20] * v.x + m[M21] * v.y + m[M22] * v.z,
        )
    }
}

/// The twelve 2×2 minors shared by the determinant and the adjugate.
struct Minors {
    b00: f32,
    b01: f32,
    b02: f32,
    b03: f32,
    b04: f32,
    b05: f32,
    b06: f32,
    b07: f32,
    b08: f32,
    b09: f32,
    b10: f32,
    b11: f32,
}

impl Minors {
    fn of(val: &[f32; 16]) -> Self {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            *val;
        Self {
            b00: a00 * a11 - a01 * a10,
            b01: a00 * a12 - a02 * a10,
            b02: a00 * a13 - a03 * a10,
            b03: a01 * a12 - a02 * a11,
            b04: a01 * a13 - a03 * a11,
            b05: a02 * a13 - a03 * a12,
            b06: a20 * a31 - a21 * a30,
            b07: a20 * a32 - a22 * a30,
            b08: a20 * a33 - a23 * a30,
            b09: a21 * a32 - a22 * a31,
            b10: a21 * a33 - a23 * a31,
            b11: a22 * a33 - a23 * a32,
        }
    }

    fn determinant(&self) -> f32 {
        self.b00 * self.b11 - self.b01 * self.b10
            + self.b02 * self.b09
            + self.b03 * self.b08
            - self.b04 * self.b07
            + self.b05 * self.b06
    }
}

impl std::ops::Add for Matrix4 {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign for Matrix4 {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.val.iter_mut().zip(rhs.val) {
            *a += b;
        }
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0_f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = (0..4)
                    .map(|k| self.val[k * 4 + row] * rhs.val[col * 4 + k])
                    .sum();
            }
        }
        Self { val: out }
    }
}

impl std::ops::MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Transforms a point (w = 1), dividing by the resulting w when it is
/// neither zero nor one.
impl std::ops::Mul<Vector3> for Matrix4 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        let m = &self.val;
        let x = m[M00] * v.x + m[M01] * v.y + m[M02] * v.z + m[M03];
        let y = m[M10] * v.x + m[M11] * v.y + m[M12] * v.z + m[M13];
        let z = m[M20] * v.x + m[M21] * v.y + m[M22] * v.z + m[M23];
        let w = m[M30] * v.x + m[M31] * v.y + m[M32] * v.z + m[M33];
        let p = Vector3::new(x, y, z);
        if w == 1.0 {
            p
        } else {
            p / w
        }
    }
}

impl From<Quaternion> for Matrix4 {
    fn from(quat: Quaternion) -> Self {
        let mut m = Self::IDENTITY;
        let _ = m.set_from_quaternion(quat);
        m
    }
}

impl From<Mat4> for Matrix4 {
    fn from(m: Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Matrix4> for Mat4 {
    fn from(m: Matrix4) -> Self {
        Self::from_cols_array(&m.val)
    }
}
