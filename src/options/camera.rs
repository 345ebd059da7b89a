use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, initial pose, and navigation parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial viewing direction.
    #[schemars(skip)]
    pub direction: [f32; 3],
    /// Initial up vector. Must not be parallel to `direction`.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Movement speed far from the surface, in units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub unit_speed: f32,
    /// Multiplier applied to movement while boosted.
    #[schemars(title = "Boost", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub speed_up: f32,
    /// Look rotation per pixel of mouse motion, in degrees.
    #[schemars(title = "Look Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub degrees_per_pixel: f32,
    /// Zoom factor per scroll notch.
    #[schemars(title = "Zoom Speed", range(min = 1.001, max = 1.2), extend("step" = 0.001))]
    pub scale_per_scroll: f32,
    /// Lowest zoom the controller allows.
    #[schemars(skip)]
    pub min_zoom: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 67.0,
            znear: 1.0,
            zfar: 100.0,
            position: [0.0, 0.0, -3.0],
            direction: [0.0, 0.0, 1.0],
            up: [0.0, 1.0, 0.0],
            unit_speed: 1.0,
            speed_up: 5.0,
            degrees_per_pixel: 0.2,
            scale_per_scroll: 1.01,
            min_zoom: 1.0,
        }
    }
}
