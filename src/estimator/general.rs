use super::DistanceEstimator;
use crate::math::Vector3;
use crate::options::FractalOptions;

/// Mandelbulb estimator for any integer power, iterating in spherical
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbulbEstimator {
    /// Triplex exponent.
    pub power: u32,
    /// Iteration cap.
    pub max_iterations: u32,
    /// Escape radius.
    pub bailout: f32,
}

impl Default for MandelbulbEstimator {
    fn default() -> Self {
        Self::from_options(&FractalOptions::default())
    }
}

impl MandelbulbEstimator {
    /// Build from `options`.
    pub fn from_options(options: &FractalOptions) -> Self {
        Self {
            power: options.power,
            max_iterations: options.max_iterations,
            bailout: options.bailout,
        }
    }
}

impl DistanceEstimator for MandelbulbEstimator {
    fn estimate(&self, point: Vector3) -> f32 {
        let power = i32::try_from(self.power).unwrap_or(i32::MAX);
        let n = power as f32;

        let mut z = point;
        let mut dr = 1.0_f32;
        let mut r = 0.0_f32;

        for _ in 0..self.max_iterations {
            r = z.length();
            if r > self.bailout {
                break;
            }
            if r == 0.0 {
                // Every angle is undefined at the origin; restart the orbit.
                z = point;
                dr = 1.0;
                continue;
            }

            // Rounding in `length` can leave `|z.z|` a hair above `r`.
            let theta = (z.z / r).clamp(-1.0, 1.0).asin() * n;
            let phi = z.y.atan2(z.x) * n;
            dr = n * r.powi(power - 1) * dr + 1.0;

            let zr = r.powi(power);
            let (sin_theta, cos_theta) = theta.sin_cos();
            let (sin_phi, cos_phi) = phi.sin_cos();
            z = Vector3::new(
                zr * cos_theta * cos_phi,
                zr * cos_theta * sin_phi,
                zr * sin_theta,
            ) + point;
        }

        if r == 0.0 {
            return 0.0;
        }
        0.5 * r.ln() * r / dr
    }
}
