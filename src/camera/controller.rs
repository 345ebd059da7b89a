use crate::camera::core::Camera;
use crate::math::Vector3;
use crate::options::{CameraOptions, Options};

/// Lowest zoom floor accepted from configuration.
const ZOOM_FLOOR: f32 = 1e-3;

/// Direction of a held movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Along the viewing direction.
    Forward,
    /// Against the viewing direction.
    Backward,
    /// Against the screen-right vector.
    Left,
    /// Along the screen-right vector.
    Right,
    /// Along the up vector.
    Up,
    /// Against the up vector.
    Down,
}

/// First-person controller that slows down near the fractal surface.
///
/// Input arrives already decoded (motion keys, pixel deltas, scroll
/// notches); the controller never touches a window or event loop.
#[derive(Debug)]
pub struct CameraController {
    /// The controlled camera.
    pub camera: Camera,
    unit_speed: f32,
    speed_up: f32,
    degrees_per_pixel: f32,
    scale_per_scroll: f32,
    min_zoom: f32,
    boost: bool,
}

impl CameraController {
    /// Build a camera and controller from the full option set.
    pub fn new(options: &Options) -> Self {
        let camera = Camera::new(
            &options.camera,
            &options.fractal,
            options.display.width,
            options.display.height,
        );
        Self::with_camera(camera, &options.camera)
    }

    /// Wrap an existing camera, taking speeds from `options`.
    pub fn with_camera(camera: Camera, options: &CameraOptions) -> Self {
        let min_zoom = options.min_zoom.max(ZOOM_FLOOR);
        if min_zoom != options.min_zoom {
            log::warn!(
                "min_zoom {} is below {ZOOM_FLOOR}; using {ZOOM_FLOOR}",
                options.min_zoom
            );
        }
        Self {
            camera,
            unit_speed: options.unit_speed,
            speed_up: options.speed_up,
            degrees_per_pixel: options.degrees_per_pixel,
            scale_per_scroll: options.scale_per_scroll,
            min_zoom,
            boost: false,
        }
    }

    /// Current movement speed in units per second.
    ///
    /// Proportional to the square root of the estimated surface distance,
    /// or `unit_speed` when the camera is on or inside the surface.
    pub fn velocity(&self) -> f32 {
        let distance = self.camera.estimate_distance();
        let base = if distance > 0.0 {
            self.unit_speed * distance.sqrt()
        } else {
            self.unit_speed
        };
        let velocity = base / self.camera.zoom;
        if self.boost {
            velocity * self.speed_up
        } else {
            velocity
        }
    }

    /// Move for `dt` seconds in `motion`'s direction.
    pub fn translate(&mut self, motion: Motion, dt: f32) {
        let offset = (self.velocity() * dt).abs();
        let camera = &self.camera;
        let step = match motion {
            Motion::Forward => camera.direction.normalized(),
            Motion::Backward => -camera.direction.normalized(),
            Motion::Right => Vector3::cross(camera.direction, camera.up).normalized(),
            Motion::Left => -Vector3::cross(camera.direction, camera.up).normalized(),
            Motion::Up => camera.up.normalized(),
            Motion::Down => -camera.up.normalized(),
        };
        self.camera.position += step * offset;
    }

    /// Turn by a mouse delta in pixels: yaw about up, then pitch about the
    /// screen-right vector.
    pub fn look(&mut self, dx: f32, dy: f32) {
        let yaw = dx * self.degrees_per_pixel / self.camera.zoom;
        let pitch = dy * self.degrees_per_pixel / self.camera.zoom;

        let up = self.camera.up;
        let _ = self.camera.direction.rotate(up, yaw);

        let right = Vector3::cross(self.camera.direction, self.camera.up).normalized();
        self.camera.rotate(right, pitch);
    }

    /// Zoom in for positive `delta`, out for negative. At most two notches
    /// count per event.
    pub fn scroll(&mut self, delta: f32) {
        let factor = self.scale_per_scroll.powf(delta.abs().min(2.0));
        if delta > 0.0 {
            self.camera.zoom *= factor;
        } else if delta < 0.0 {
            self.camera.zoom /= factor;
        }
        self.camera.zoom = self.camera.zoom.max(self.min_zoom);
        log::debug!("zoom = {}", self.camera.zoom);
    }

    /// Enable or disable the movement multiplier.
    pub fn set_boost(&mut self, boost: bool) {
        self.boost = boost;
    }

    /// Whether the movement multiplier is active.
    pub fn is_boosted(&self) -> bool {
        self.boost
    }

    /// Recompute the camera matrices.
    pub fn update(&mut self) {
        self.camera.update();
    }
}
