use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Raymarching", inline)]
#[serde(default)]
/// Raymarching tolerances and shading effects passed to the shader.
pub struct RenderOptions {
    /// Surface epsilon before proximity scaling.
    #[schemars(title = "Epsilon", range(min = 0.00001, max = 0.01), extend("step" = 0.00001))]
    pub epsilon_factor: f32,
    /// Smallest epsilon ever sent to the shader.
    #[schemars(skip)]
    pub epsilon_limit: f32,
    /// Raymarching step cap.
    #[schemars(title = "Max Steps", range(min = 1, max = 512))]
    pub max_steps: u32,
    /// View distance before proximity scaling.
    #[schemars(title = "View Distance", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub max_dist: f32,
    /// Distance fog toggle.
    #[schemars(title = "Fog")]
    pub fog_enabled: bool,
    /// Distance at which fog is opaque.
    #[schemars(title = "Fog Distance", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub fog_max_dist: f32,
    /// Glow around near misses.
    #[schemars(title = "Glow")]
    pub glow_enabled: bool,
    /// Miss distance that still contributes glow.
    #[schemars(title = "Glow Distance", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub glow_dist: f32,
    /// Color by step count instead of shading.
    #[schemars(title = "Step Heatmap")]
    pub heat_enabled: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            epsilon_factor: 0.0001,
            epsilon_limit: 4e-6,
            max_steps: 20,
            max_dist: 350.0,
            fog_enabled: true,
            fog_max_dist: 300.0,
            glow_enabled: true,
            glow_dist: 0.5,
            heat_enabled: false,
        }
    }
}
