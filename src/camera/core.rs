use crate::error::BulbError;
use crate::estimator::{DistanceEstimator, Estimator};
use crate::math::{Matrix4, Vector3};
use crate::options::{CameraOptions, FractalOptions};

/// Perspective camera defined by position, viewing direction, up vector,
/// and projection parameters.
///
/// Pose fields are public and may be mutated freely. The derived
/// matrices are stale after any mutation until [`Camera::update`] runs.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vector3,
    /// Viewing direction. Need not be unit length.
    pub direction: Vector3,
    /// Up vector. Must not be parallel to `direction`.
    pub up: Vector3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
    /// Navigation zoom. Divides movement and look speeds.
    pub zoom: f32,
    /// Estimator evaluated at `position`.
    pub estimator: Estimator,
    projection: Matrix4,
    view: Matrix4,
    combined: Matrix4,
}

impl Camera {
    /// Create a camera at the configured initial pose. Matrices are
    /// identity until the first [`Camera::update`].
    pub fn new(
        options: &CameraOptions,
        fractal: &FractalOptions,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Self {
        Self {
            position: options.position.into(),
            direction: options.direction.into(),
            up: options.up.into(),
            fovy: options.fovy,
            near: options.znear,
            far: options.zfar,
            viewport_width,
            viewport_height,
            zoom: options.min_zoom.max(1.0),
            estimator: Estimator::from_options(fractal),
            projection: Matrix4::IDENTITY,
            view: Matrix4::IDENTITY,
            combined: Matrix4::IDENTITY,
        }
    }

    /// Estimated distance from the camera position to the fractal
    /// surface. Non-positive inside the bulb.
    pub fn estimate_distance(&self) -> f32 {
        self.estimator.estimate(self.position)
    }

    /// Proximity factor in `(0, unit]`: `unit` while the surface is at
    /// least `unit` away, shrinking toward zero as the camera closes in.
    pub fn scale(&self, unit: f32) -> f32 {
        let distance = self.estimate_distance();
        if distance.abs() >= unit {
            unit
        } else {
            (distance / unit).abs()
        }
    }

    /// [`Camera::scale`] with a unit of `1.0`.
    pub fn scale_unit(&self) -> f32 {
        self.scale(1.0)
    }

    /// Rotate direction and up about `axis` by `degrees`.
    pub fn rotate(&mut self, axis: Vector3, degrees: f32) {
        let _ = self.direction.rotate(axis, degrees);
        let _ = self.up.rotate(axis, degrees);
    }

    /// Rotate direction and up about `(axis_x, axis_y, axis_z)`.
    pub fn rotate_xyz(
        &mut self,
        axis_x: f32,
        axis_y: f32,
        axis_z: f32,
        degrees: f32,
    ) {
        self.rotate(Vector3::new(axis_x, axis_y, axis_z), degrees);
    }

    /// Renormalize direction and make up perpendicular to it, undoing
    /// drift from repeated rotations. A degenerate pose is left as is.
    pub fn orthonormalize(&mut self) {
        let direction = self.direction.normalized();
        let right = Vector3::cross(direction, self.up);
        if right.length_squared() == 0.0 {
            log::warn!(
                "cannot orthonormalize: direction {:?} is parallel to up {:?}",
                self.direction,
                self.up
            );
            return;
        }
        self.direction = direction;
        self.up = Vector3::cross(right.normalized(), direction).normalized();
    }

    /// Set the viewport size used for the aspect ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Viewport width over height, `1.0` for a zero-height viewport.
    pub fn aspect(&self) -> f32 {
        if self.viewport_height == 0 {
            return 1.0;
        }
        self.viewport_width as f32 / self.viewport_height as f32
    }

    /// Recompute projection, view, and `combined = projection · view`.
    pub fn update(&mut self) {
        if self.viewport_height == 0 {
            log::warn!(
                "viewport {}x0 has no height; using aspect 1.0",
                self.viewport_width
            );
        }
        let _ = self.projection.set_to_projection(
            self.near.abs(),
            self.far.abs(),
            self.fovy,
            self.aspect(),
        );
        let _ = self.view.set_to_look_at(
            self.position,
            self.position + self.direction,
            self.up,
        );
        self.combined = self.projection * self.view;
    }

    /// Projection matrix as of the last update.
    pub fn projection(&self) -> &Matrix4 {
        &self.projection
    }

    /// View matrix as of the last update.
    pub fn view(&self) -> &Matrix4 {
        &self.view
    }

    /// Projection times view, as of the last update.
    pub fn combined(&self) -> &Matrix4 {
        &self.combined
    }

    /// Inverse of [`Camera::combined`], used to unproject screen points.
    pub fn inverse_combined(&self) -> Result<Matrix4, BulbError> {
        self.combined.try_inverse()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;
    use crate::options::EstimatorKind;

    fn camera() -> Camera {
        Camera::new(
            &CameraOptions::default(),
            &FractalOptions::default(),
            1024,
            768,
        )
    }

    fn assert_matrix_eq(a: &Matrix4, b: &Matrix4, eps: f32) {
        for (i, (x, y)) in a.as_array().iter().zip(b.as_array()).enumerate() {
            assert!((x - y).abs() <= eps, "index {i}: {x} vs {y}");
        }
    }

    #[test]
    fn matrices_are_stale_until_update() {
        let mut cam = camera();
        assert_eq!(*cam.combined(), Matrix4::IDENTITY);
        cam.update();
        let before = *cam.combined();
        cam.position.z = -5.0;
        assert_eq!(*cam.combined(), before);
        cam.update();
        assert_ne!(*cam.combined(), before);
    }

    #[test]
    fn combined_is_projection_times_view() {
        let mut cam = camera();
        cam.update();

        let aspect = 1024.0 / 768.0;
        let mut projection = Matrix4::IDENTITY;
        let _ = projection.set_to_projection(1.0, 100.0, 67.0, aspect);
        let mut view = Matrix4::IDENTITY;
        let _ = view.set_to_look_at(
            Vector3::new(0.0, 0.0, -3.0),
            Vector3::new(0.0, 0.0, -2.0),
            Vector3::Y,
        );
        let mut expected = projection;
        let _ = expected.mul(&view);
        assert_matrix_eq(cam.combined(), &expected, 1e-6);

        let commuted = view * projection;
        assert_ne!(*cam.combined(), commuted);

        let glam_combined = Mat4::perspective_rh_gl(
            67.0_f32.to_radians(),
            aspect,
            1.0,
            100.0,
        ) * Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::Y,
        );
        assert_matrix_eq(cam.combined(), &Matrix4::from(glam_combined), 1e-5);
    }

    #[test]
    fn negative_planes_use_magnitude() {
        let mut a = camera();
        let mut b = camera();
        b.near = -1.0;
        b.far = -100.0;
        a.update();
        b.update();
        assert_eq!(a.projection(), b.projection());
    }

    #[test]
    fn zero_height_viewport_uses_unit_aspect() {
        let mut cam = camera();
        cam.set_viewport(800, 0);
        cam.update();
        let p = cam.projection();
        assert!(p.get(0, 0).is_finite());
        assert_eq!(p.get(0, 0), p.get(1, 1));
    }

    #[test]
    fn scale_saturates_far_from_surface() {
        let cam = camera();
        assert!(cam.estimate_distance() >= 1.0);
        assert_eq!(cam.scale_unit(), 1.0);
        assert_eq!(cam.scale(1.5), 1.5);
    }

    #[test]
    fn scale_tracks_distance_near_surface() {
        let mut cam = camera();
        cam.position = Vector3::new(0.0, 0.0, -1.3);
        let d = cam.estimate_distance();
        assert!(d > 0.0 && d < 1.0);
        assert_eq!(cam.scale_unit(), d.abs());

        let far = camera();
        let unit = 4.0;
        let expected = (far.estimate_distance() / unit).abs();
        assert_eq!(far.scale(unit), expected);
    }

    #[test]
    fn scale_at_exactly_unit_distance_returns_unit() {
        let far = camera();
        let d = far.estimate_distance();
        assert_eq!(far.scale(d), d);

        let mut near = camera();
        near.position = Vector3::new(0.0, 0.0, -1.3);
        let d = near.estimate_distance().abs();
        assert_eq!(near.scale(d), d);

        let mut inside = camera();
        inside.position = Vector3::new(0.1, 0.1, 0.1);
        let d = inside.estimate_distance();
        assert!(d < 0.0);
        assert_eq!(inside.scale(d.abs()), d.abs());
    }

    #[test]
    fn scale_uses_magnitude_inside_the_bulb() {
        let mut cam = camera();
        cam.position = Vector3::new(0.1, 0.1, 0.1);
        let s = cam.scale_unit();
        assert!(s > 0.0 && s <= 1.0);
    }

    #[test]
    fn configured_estimator_is_used() {
        let fractal = FractalOptions {
            estimator: EstimatorKind::General,
            ..FractalOptions::default()
        };
        let cam = Camera::new(&CameraOptions::default(), &fractal, 1, 1);
        assert_eq!(cam.estimator.kind(), EstimatorKind::General);
    }

    #[test]
    fn rotate_turns_direction_and_up_together() {
        let mut cam = camera();
        cam.rotate(Vector3::Y, 90.0);
        assert!((cam.direction - Vector3::X).length() < 1e-5);
        assert!((cam.up - Vector3::Y).length() < 1e-5);

        cam.rotate_xyz(1.0, 0.0, 0.0, 90.0);
        assert!(cam.direction.dot(cam.up).abs() < 1e-5);
    }

    #[test]
    fn orthonormalize_removes_drift() {
        let mut cam = camera();
        cam.direction = Vector3::new(0.1, 0.0, 2.0);
        cam.up = Vector3::new(0.0, 1.0, 0.3);
        cam.orthonormalize();
        assert!((cam.direction.length() - 1.0).abs() < 1e-5);
        assert!((cam.up.length() - 1.0).abs() < 1e-5);
        assert!(cam.direction.dot(cam.up).abs() < 1e-5);
    }

    #[test]
    fn orthonormalize_leaves_degenerate_pose() {
        let mut cam = camera();
        cam.up = cam.direction;
        let before = (cam.direction, cam.up);
        cam.orthonormalize();
        assert_eq!((cam.direction, cam.up), before);
    }

    #[test]
    fn inverse_combined_undoes_combined() {
        let mut cam = camera();
        cam.update();
        let inverse = cam.inverse_combined().unwrap();
        assert_matrix_eq(&(*cam.combined() * inverse), &Matrix4::IDENTITY, 1e-4);
    }
}
