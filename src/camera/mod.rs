//! Camera system for flying through the fractal.
//!
//! [`Camera`] owns the pose and derived matrices and measures its own
//! distance to the surface. [`CameraController`] turns decoded input into
//! distance-throttled movement, and [`RenderUniform`] packs the per-frame
//! shader parameters.

/// Distance-throttled movement, look, and zoom.
pub mod controller;
/// Core camera struct: pose, matrices, adaptive scale.
pub mod core;
/// Per-frame shader parameter block.
pub mod uniform;

pub use self::controller::{CameraController, Motion};
pub use self::core::Camera;
pub use self::uniform::RenderUniform;
