//! Centralized viewer options with TOML preset support.
//!
//! Every tweakable constant (camera pose and speeds, fractal iteration
//! bounds, raymarching tolerances, viewport) lives here instead of in
//! process-wide constants. Options serialize to/from TOML so a viewer can
//! keep named presets on disk.

mod camera;
mod display;
mod fractal;
mod render;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use fractal::{EstimatorKind, FractalOptions};
pub use render::RenderOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BulbError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[fractal]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, pose, and navigation parameters.
    pub camera: CameraOptions,
    /// Fractal iteration parameters.
    pub fractal: FractalOptions,
    /// Raymarching tolerances and effects.
    pub render: RenderOptions,
    /// Viewport and frame pacing.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, BulbError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BulbError> {
        let content = std::fs::read_to_string(path).map_err(BulbError::Io)?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BulbError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BulbError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BulbError::Io)?;
        }
        std::fs::write(path, content).map_err(BulbError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[fractal]
estimator = "general"
power = 9
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.fractal.estimator, EstimatorKind::General);
        assert_eq!(opts.fractal.power, 9);
        // Everything else should be default
        assert_eq!(opts.fractal.bailout, 2.0);
        assert_eq!(opts.camera.fovy, 67.0);
        assert_eq!(opts.render.max_dist, 350.0);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[fractal]\npower = \"eight\"").unwrap_err();
        assert!(matches!(err, BulbError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("bulbcam-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.fovy = 80.0;
        opts.save(&dir.join("wide.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "wide"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/bulbcam.toml"))
            .unwrap_err();
        assert!(matches!(err, BulbError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("fractal"));
        assert!(props.contains_key("render"));
        assert!(props.contains_key("display"));

        // UI-exposed fields present, internal ones skipped
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("position").is_none());
        let fractal = &props["fractal"]["properties"];
        assert!(fractal.get("power").is_some());
        assert!(fractal.get("fast_rsqrt").is_none());
    }
}
