use super::DistanceEstimator;
use crate::math::{fast_rsqrt, rsqrt, Vector3};
use crate::options::FractalOptions;

/// Power-8 Mandelbulb estimator using the closed-form polynomial for the
/// eighth triplex power.
///
/// Trades generality for speed: no trigonometry, and only a handful of
/// iterations. The pole of the triplex power is the Y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Power8Estimator {
    /// Iteration cap.
    pub max_iterations: u32,
    /// Squared-magnitude escape threshold.
    pub bailout: f32,
    /// Use [`fast_rsqrt`] instead of [`rsqrt`].
    pub fast_rsqrt: bool,
}

impl Default for Power8Estimator {
    fn default() -> Self {
        Self::from_options(&FractalOptions::default())
    }
}

impl Power8Estimator {
    /// Build from the fast-path fields of `options`.
    pub fn from_options(options: &FractalOptions) -> Self {
        Self {
            max_iterations: options.fast_iterations,
            bailout: options.fast_bailout,
            fast_rsqrt: options.fast_rsqrt,
        }
    }

    #[inline]
    fn inv_sqrt(&self, x: f32) -> f32 {
        if self.fast_rsqrt {
            fast_rsqrt(x)
        } else {
            rsqrt(x)
        }
    }

    /// One application of `w -> w^8 + c`.
    fn step(&self, w: Vector3, c: Vector3) -> Vector3 {
        let (x, y, z) = (w.x, w.y, w.z);
        let (x2, y2, z2) = (x * x, y * y, z * z);
        let (x4, y4, z4) = (x2 * x2, y2 * y2, z2 * z2);

        let k3 = x2 + z2;
        let k7 = k3 * k3 * k3 * k3 * k3 * k3 * k3;
        // On (or numerically at) the pole every term scaled by k2 also
        // carries a vanishing factor, so zero is the limit.
        let k2 = if k7 > 0.0 { self.inv_sqrt(k7) } else { 0.0 };
        let k1 = x4 + y4 + z4 - 6.0 * y2 * z2 - 6.0 * x2 * y2 + 2.0 * z2 * x2;
        let k4 = x2 - y2 + z2;

        Vector3::new(
            c.x + 64.0
                * x
                * y
                * z
                * (x2 - z2)
                * k4
                * (x4 - 6.0 * x2 * z2 + z4)
                * k1
                * k2,
            c.y + -16.0 * y2 * k3 * k4 * k4 + k1 * k1,
            c.z + -8.0
                * y
                * k4
                * (x4 * x4 - 28.0 * x4 * x2 * z2 + 70.0 * x4 * z4
                    - 28.0 * x2 * z2 * z4
                    + z4 * z4)
                * k1
                * k2,
        )
    }
}

impl DistanceEstimator for Power8Estimator {
    fn estimate(&self, point: Vector3) -> f32 {
        let mut w = point;
        let mut m = w.length_squared();
        let mut dr = 1.0_f32;

        for _ in 0..self.max_iterations {
            if m > self.bailout {
                break;
            }
            dr = 8.0 * m.sqrt().powi(7) * dr + 1.0;
            w = self.step(w, point);
            m = w.length_squared();
        }

        if m == 0.0 {
            return 0.0;
        }
        0.25 * m.ln() * m.sqrt() / dr
    }
}
