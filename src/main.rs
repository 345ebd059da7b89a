//! Headless fly-through probe.
//!
//! Flies the camera straight ahead for a number of frames and logs how the
//! surface distance, speed, and shader parameters evolve. Run with
//! `RUST_LOG=info` (or `debug`) to see the output.
//!
//! Usage: `bulbcam [OPTIONS.toml] [FRAMES]`

use std::path::Path;

use bulbcam::math::Vector3;
use bulbcam::{BulbError, CameraController, Motion, Options, RenderUniform};

const DEFAULT_FRAMES: u32 = 600;
const LOG_EVERY: u32 = 60;

fn load_options(arg: Option<&str>) -> Result<Options, BulbError> {
    match arg {
        Some(path) => Options::load(Path::new(path)),
        None => Ok(Options::default()),
    }
}

fn fly(options: &Options, frames: u32) -> Result<(), BulbError> {
    let mut controller = CameraController::new(options);
    let dt = options.display.frame_time();
    controller.update();

    for frame in 0..frames {
        controller.translate(Motion::Forward, dt);
        controller.update();

        if frame % LOG_EVERY == 0 {
            let camera = &controller.camera;
            let uniform = RenderUniform::from_camera(
                camera,
                &options.fractal,
                &options.render,
            );
            log::info!(
                "frame {frame}: z = {:.5}, distance = {:.6}, speed = {:.5}, \
                 scale = {:.5}, epsilon = {:.2e}, iterations = {}",
                camera.position.z,
                camera.estimate_distance(),
                controller.velocity(),
                uniform.scale,
                uniform.epsilon,
                uniform.iterations,
            );
        }
    }

    // Unprojecting the screen center checks the final matrices are sound.
    let inverse = controller.camera.inverse_combined()?;
    let center = inverse * Vector3::ZERO;
    log::info!("screen center unprojects to {center:?}");
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let options = match load_options(args.next().as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let frames = match args.next().map(|s| s.parse::<u32>()) {
        None => DEFAULT_FRAMES,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("invalid frame count: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "flying {frames} frames at {} fps, estimator {:?}",
        options.display.target_fps,
        options.fractal.estimator
    );
    if let Err(e) = fly(&options, frames) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
