use crate::camera::core::Camera;
use crate::math::Matrix4;
use crate::options::{FractalOptions, RenderOptions};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Shader uniform block holding the camera pose and the proximity-scaled
/// raymarching parameters. Laid out in 16-byte rows.
pub struct RenderUniform {
    /// Combined projection-view matrix, column-major.
    pub combined: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Viewing direction.
    pub direction: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Camera up vector.
    pub up: [f32; 3],
    /// Proximity factor from [`Camera::scale_unit`].
    pub scale: f32,
    /// Surface hit tolerance.
    pub epsilon: f32,
    /// Ray length cap.
    pub view_limit: f32,
    /// Distance at which fog is opaque.
    pub fog_max_dist: f32,
    /// Miss distance that still contributes glow.
    pub glow_dist: f32,
    /// Fractal iterations per distance evaluation.
    pub iterations: u32,
    /// Raymarching step cap.
    pub max_steps: u32,
    /// Bulb power.
    pub power: u32,
    /// Divergence radius.
    pub bailout: f32,
    /// Viewport size in pixels.
    pub resolution: [f32; 2],
    /// Fog toggle (0 or 1).
    pub fog_enabled: u32,
    /// Glow toggle (0 or 1).
    pub glow_enabled: u32,
    /// Step heatmap toggle (0 or 1).
    pub heat_enabled: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [u32; 3],
}

impl Default for RenderUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderUniform {
    /// Uniform with an identity matrix and everything else zeroed.
    pub fn new() -> Self {
        Self {
            combined: Matrix4::IDENTITY.to_cols_array_2d(),
            ..bytemuck::Zeroable::zeroed()
        }
    }

    /// Build a uniform for the camera's current state.
    pub fn from_camera(
        camera: &Camera,
        fractal: &FractalOptions,
        render: &RenderOptions,
    ) -> Self {
        let mut uniform = Self::new();
        uniform.update(camera, fractal, render);
        uniform
    }

    /// Refresh every field from the camera and options. The camera's
    /// matrices should be up to date.
    pub fn update(
        &mut self,
        camera: &Camera,
        fractal: &FractalOptions,
        render: &RenderOptions,
    ) {
        let scale = camera.scale_unit();

        self.combined = camera.combined().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = camera.aspect();
        self.direction = camera.direction.to_array();
        self.fovy = camera.fovy;
        self.up = camera.up.to_array();
        self.scale = scale;

        self.epsilon = (render.epsilon_factor * scale).max(render.epsilon_limit);
        self.view_limit = (render.max_dist * scale).max(camera.near.abs());
        self.fog_max_dist = render.fog_max_dist;
        self.glow_dist = render.glow_dist;

        self.iterations = interpolate_iterations(
            fractal.min_iterations,
            fractal.max_iterations,
            scale,
        );
        self.max_steps = render.max_steps;
        self.power = fractal.power;
        self.bailout = fractal.bailout;

        self.resolution = [
            camera.viewport_width as f32,
            camera.viewport_height as f32,
        ];
        self.fog_enabled = u32::from(render.fog_enabled);
        self.glow_enabled = u32::from(render.glow_enabled);
        self.heat_enabled = u32::from(render.heat_enabled);
    }

    /// Raw bytes for a buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// `far` iterations at scale 1, rising linearly to `near` as the scale
/// approaches 0.
fn interpolate_iterations(far: u32, near: u32, scale: f32) -> u32 {
    let t = 1.0 - scale.clamp(0.0, 1.0);
    let far = far as f32;
    let near = near as f32;
    (far + (near - far) * t).round() as u32
}
