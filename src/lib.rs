// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Mandelbulb distance estimation and camera transforms for raymarched
//! fractal viewers.
//!
//! The crate is the CPU half of a fractal fly-through: it estimates how
//! far the camera is from the bulb's surface and uses that distance to
//! throttle navigation and tune the shader's precision. Windowing, input
//! decoding, and the raymarching shader itself live in the host.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - pose, matrices, and the adaptive `scale` factor
//! - [`camera::CameraController`] - distance-throttled movement and zoom
//! - [`camera::RenderUniform`] - per-frame shader parameters
//! - [`estimator`] - power-8 and general-power distance estimators
//! - [`math`] - vector, quaternion, and column-major matrix algebra
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Frame flow
//!
//! Host input mutates the camera (directly or through the controller),
//! [`camera::Camera::update`] recomputes projection and view, the camera
//! evaluates its estimator at its own position, and the resulting scale
//! feeds both movement speed and [`camera::RenderUniform`].

pub mod camera;
pub mod error;
pub mod estimator;
pub mod math;
pub mod options;

pub use camera::{Camera, CameraController, Motion, RenderUniform};
pub use error::BulbError;
pub use estimator::{DistanceEstimator, Estimator};
pub use options::Options;
