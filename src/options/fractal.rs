use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which distance estimator the camera runs on its own position.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    /// Closed-form power-8 iteration with few steps.
    #[default]
    Power8,
    /// Spherical-coordinate iteration for any integer power.
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fractal", inline)]
#[serde(default)]
/// Mandelbulb iteration parameters shared by the CPU estimator and the
/// shader.
pub struct FractalOptions {
    /// Estimator used for camera proximity.
    #[schemars(title = "Estimator")]
    pub estimator: EstimatorKind,
    /// Bulb power. The power-8 estimator always evaluates 8.
    #[schemars(title = "Power", range(min = 2, max = 16))]
    pub power: u32,
    /// Divergence radius for the general estimator and the shader.
    #[schemars(title = "Bailout", range(min = 1.0, max = 8.0), extend("step" = 0.1))]
    pub bailout: f32,
    /// Iteration cap for the general estimator and the shader near the
    /// surface.
    #[schemars(title = "Max Iterations", range(min = 1, max = 64))]
    pub max_iterations: u32,
    /// Shader iteration count far from the surface.
    #[schemars(title = "Min Iterations", range(min = 1, max = 64))]
    pub min_iterations: u32,
    /// Iteration cap for the power-8 estimator.
    #[schemars(skip)]
    pub fast_iterations: u32,
    /// Squared-magnitude bailout for the power-8 estimator.
    #[schemars(skip)]
    pub fast_bailout: f32,
    /// Use the bit-level reciprocal square root approximation.
    #[schemars(skip)]
    pub fast_rsqrt: bool,
}

impl Default for FractalOptions {
    fn default() -> Self {
        Self {
            estimator: EstimatorKind::Power8,
            power: 8,
            bailout: 2.0,
            max_iterations: 10,
            min_iterations: 10,
            fast_iterations: 4,
            fast_bailout: 256.0,
            fast_rsqrt: false,
        }
    }
}
