//! Mandelbulb distance estimators.
//!
//! Both estimators run an escape-time iteration while tracking the running
//! derivative `dr`, then turn the escape radius into a conservative
//! distance bound. The result drives raymarch step sizes and the camera's
//! proximity-based speed scaling.
//!
//! Estimates are always finite. Points whose orbit escapes get a positive
//! distance; points that stay inside the unit ball for every iteration get
//! a non-positive value whose magnitude still tracks proximity, and a
//! point whose orbit collapses onto the origin gets `0.0`.

/// Spherical-coordinate iteration for arbitrary powers.
pub mod general;
/// Closed-form power-8 iteration.
pub mod power8;

pub use general::MandelbulbEstimator;
pub use power8::Power8Estimator;

use crate::math::Vector3;
use crate::options::{EstimatorKind, FractalOptions};

/// A function from a point in space to an estimated distance to the
/// fractal surface.
///
/// Implementations are pure: the same point always yields the same
/// estimate and no state is carried between calls.
pub trait DistanceEstimator {
    /// Estimated distance from `point` to the surface. May under-estimate
    /// near high-curvature regions.
    fn estimate(&self, point: Vector3) -> f32;
}

/// Estimator selected by [`FractalOptions::estimator`].
#[derive(Debug, Clone, PartialEq)]
pub enum Estimator {
    /// Fixed power 8, closed form.
    Power8(Power8Estimator),
    /// Any integer power.
    General(MandelbulbEstimator),
}

impl Estimator {
    /// Build the configured estimator.
    pub fn from_options(options: &FractalOptions) -> Self {
        match options.estimator {
            EstimatorKind::Power8 => {
                if options.power != 8 {
                    log::warn!(
                        "power8 estimator selected with power {}; the closed \
                         form always evaluates power 8",
                        options.power
                    );
                }
                Self::Power8(Power8Estimator::from_options(options))
            }
            EstimatorKind::General => {
                Self::General(MandelbulbEstimator::from_options(options))
            }
        }
    }

    /// Which variant this is.
    pub fn kind(&self) -> EstimatorKind {
        match self {
            Self::Power8(_) => EstimatorKind::Power8,
            Self::General(_) => EstimatorKind::General,
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::Power8(Power8Estimator::default())
    }
}

impl DistanceEstimator for Estimator {
    #[inline]
    fn estimate(&self, point: Vector3) -> f32 {
        match self {
            Self::Power8(e) => e.estimate(point),
            Self::General(e) => e.estimate(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_select_variant() {
        let mut opts = FractalOptions::default();
        assert_eq!(Estimator::from_options(&opts).kind(), EstimatorKind::Power8);
        opts.estimator = EstimatorKind::General;
        assert_eq!(Estimator::from_options(&opts).kind(), EstimatorKind::General);
    }

    #[test]
    fn variants_agree_far_from_the_bulb() {
        // Beyond both bailouts neither variant iterates, so both reduce
        // to 0.5 * ln(r) * r.
        let opts = FractalOptions::default();
        let fast = Power8Estimator::from_options(&opts);
        let general = MandelbulbEstimator::from_options(&opts);
        let p = Vector3::new(0.0, 30.0, 40.0);
        let a = fast.estimate(p);
        let b = general.estimate(p);
        assert!((a - b).abs() / b < 1e-5, "{a} vs {b}");
    }

    #[test]
    fn variants_agree_on_sign_near_the_bulb() {
        let opts = FractalOptions::default();
        let fast = Estimator::Power8(Power8Estimator::from_options(&opts));
        let general = Estimator::General(MandelbulbEstimator::from_options(&opts));
        for p in [
            Vector3::new(1.5, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -3.0),
            Vector3::new(1.2, 1.2, 1.2),
        ] {
            assert!(fast.estimate(p) > 0.0, "{p:?}");
            assert!(general.estimate(p) > 0.0, "{p:?}");
        }
    }

    #[test]
    fn trait_objects_dispatch() {
        let estimators: Vec<Box<dyn DistanceEstimator>> = vec![
            Box::new(Power8Estimator::default()),
            Box::new(MandelbulbEstimator::default()),
            Box::new(Estimator::default()),
        ];
        for e in &estimators {
            assert!(e.estimate(Vector3::new(0.0, 0.0, -3.0)).is_finite());
        }
    }
}
