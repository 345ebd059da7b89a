use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use glam::Vec3;

use super::{Matrix4, Quaternion};

/// Three-component `f32` vector.
///
/// Mutating methods (`normalize`, `cross_assign`, `rotate`, ...) modify the
/// receiver and return `&mut Self` so calls can be chained. Their pure
/// counterparts (`normalized`, `cross`) return a new value.
///
/// Division by zero, whether through [`Div`] or [`Vector3::normalize`] on a
/// zero vector, leaves the components untouched instead of producing
/// NaN/Inf.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Overwrite all three components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Scale to unit length in place. A zero-length vector is left as is.
    pub fn normalize(&mut self) -> &mut Self {
        *self /= self.length();
        self
    }

    /// Unit-length copy. A zero-length vector is returned unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Cross product `a × b`.
    #[inline]
    pub fn cross(a: Self, b: Self) -> Self {
        Self::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Replace `self` with `self × other`.
    pub fn cross_assign(&mut self, other: Self) -> &mut Self {
        *self = Self::cross(*self, other);
        self
    }

    /// Transform as a point (w = 1) by `matrix`, including translation and
    /// the projective divide when the resulting w is non-zero.
    pub fn mul_matrix(&mut self, matrix: &Matrix4) -> &mut Self {
        *self = *matrix * *self;
        self
    }

    /// Transform by the upper 3×3 (rotation) block of `matrix` only.
    pub fn rot(&mut self, matrix: &Matrix4) -> &mut Self {
        *self = matrix.transform_vector(*self);
        self
    }

    /// Rotate about `axis` by `degrees`. Zero degrees is a no-op.
    pub fn rotate(&mut self, axis: Self, degrees: f32) -> &mut Self {
        if degrees == 0.0 {
            return self;
        }
        let rotation = Matrix4::from(Quaternion::from_axis_angle(axis, degrees));
        self.rot(&rotation)
    }

    /// Rotate about the axis `(axis_x, axis_y, axis_z)` by `degrees`.
    pub fn rotate_xyz(
        &mut self,
        axis_x: f32,
        axis_y: f32,
        axis_z: f32,
        degrees: f32,
    ) -> &mut Self {
        self.rotate(Self::new(axis_x, axis_y, axis_z), degrees)
    }

    /// Components as an array.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        if s == 0.0 {
            return self;
        }
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, s: f32) {
        if s != 0.0 {
            self.x /= s;
            self.y /= s;
            self.z /= s;
        }
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const EPS: f32 = 1e-4;

    fn approx_eq(a: Vector3, b: Vector3, eps: f32) -> bool {
        (a - b).length() <= eps
    }

    fn random_vectors(seed: u64, count: usize) -> Vec<Vector3> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Vector3::new(
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                )
            })
            .collect()
    }

    #[test]
    fn normalized_has_unit_length() {
        for v in random_vectors(1, 200) {
            if v.length() == 0.0 {
                continue;
            }
            assert!((v.normalized().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn normalize_zero_vector_is_untouched() {
        let mut v = Vector3::ZERO;
        let _ = v.normalize();
        assert_eq!(v, Vector3::ZERO);
        assert_eq!(Vector3::ZERO.normalized(), Vector3::ZERO);
    }

    #[test]
    fn divide_by_zero_returns_operand() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(v / 0.0, v);
        let mut w = v;
        w /= 0.0;
        assert_eq!(w, v);
    }

    #[test]
    fn cross_is_orthogonal_to_both_operands() {
        let vs = random_vectors(2, 200);
        for pair in vs.chunks_exact(2) {
            let (a, b) = (pair[0], pair[1]);
            let c = Vector3::cross(a, b);
            // Tolerance scales with the magnitudes involved.
            let tol = 1e-5 * a.length() * b.length() * a.length().max(b.length());
            assert!(c.dot(a).abs() <= tol.max(EPS));
            assert!(c.dot(b).abs() <= tol.max(EPS));
        }
    }

    #[test]
    fn cross_is_anticommutative() {
        let vs = random_vectors(3, 200);
        for pair in vs.chunks_exact(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(Vector3::cross(a, b), -Vector3::cross(b, a));
        }
    }

    #[test]
    fn cross_of_axes_follows_right_hand_rule() {
        assert_eq!(Vector3::cross(Vector3::X, Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::cross(Vector3::Y, Vector3::Z), Vector3::X);
        assert_eq!(Vector3::cross(Vector3::Z, Vector3::X), Vector3::Y);
    }

    #[test]
    fn cross_assign_matches_pure_cross() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        let mut c = a;
        let _ = c.cross_assign(b);
        assert_eq!(c, Vector3::cross(a, b));
    }

    #[test]
    fn rotate_by_zero_and_full_turn_is_identity() {
        let axis = Vector3::new(0.3, -1.0, 0.7);
        for v in random_vectors(4, 50) {
            let mut zero = v;
            let _ = zero.rotate(axis, 0.0);
            assert_eq!(zero, v);

            let mut full = v;
            let _ = full.rotate(axis, 360.0);
            assert!(approx_eq(full, v, 1e-3), "{full:?} vs {v:?}");
        }
    }

    #[test]
    fn rotate_quarter_turn_about_y() {
        let mut v = Vector3::X;
        let _ = v.rotate(Vector3::Y, 90.0);
        assert!(approx_eq(v, -Vector3::Z, 1e-5));
    }

    #[test]
    fn rotate_preserves_length() {
        for v in random_vectors(5, 50) {
            let mut r = v;
            let _ = r.rotate_xyz(1.0, 2.0, -0.5, 37.0);
            assert!((r.length() - v.length()).abs() < 1e-3);
        }
    }

    #[test]
    fn chained_mutation() {
        let mut v = Vector3::new(3.0, 0.0, 0.0);
        let _ = v.set(3.0, 4.0, 0.0).normalize();
        assert!(approx_eq(v, Vector3::new(0.6, 0.8, 0.0), 1e-6));
    }

    #[test]
    fn glam_round_trip() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let g: Vec3 = v.into();
        assert_eq!(Vector3::from(g), v);
        assert_eq!(
            Vector3::cross(v, Vector3::X),
            Vector3::from(g.cross(Vec3::X))
        );
    }
}
