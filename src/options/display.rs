use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Viewport and frame pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Viewport width in pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Viewport height in pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Frames per second the host loop aims for.
    #[schemars(title = "Target FPS", range(min = 1, max = 240))]
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            target_fps: 60,
        }
    }
}

impl DisplayOptions {
    /// Seconds per frame at the target rate.
    #[must_use]
    pub fn frame_time(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}
