//! Camera control tuning with TOML preset support.
//!
//! Both sections use `#[serde(default)]`, so partial TOML presets
//! (e.g. only overriding `[pan]`) merge over the documented defaults.
//! In code the same merge is struct-update syntax:
//!
//! ```
//! use gimbal::options::{ControlOptions, ZoomOptions};
//!
//! let options = ControlOptions {
//!     zoom: ZoomOptions { max: 500.0, ..ZoomOptions::default() },
//!     ..ControlOptions::default()
//! };
//! # assert_eq!(options.zoom.scale, 0.1);
//! # assert_eq!(options.pan.max_speed, 2.0);
//! ```

mod pan;
mod zoom;

use std::path::Path;

pub use pan::PanOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::ZoomOptions;

use crate::error::GimbalError;

/// Top-level tuning container handed to the controller at construction.
///
/// Tuning is deliberately unvalidated: degenerate values produce
/// clamped, non-crashing motion (see the per-field docs) rather than
/// construction errors.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ControlOptions {
    /// Zoom model tuning.
    pub zoom: ZoomOptions,
    /// Pan model tuning; the orbit model shares its damping values.
    pub pan: PanOptions,
}

impl ControlOptions {
    /// Generate JSON Schema describing the tunable surface.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ControlOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GimbalError> {
        let content = std::fs::read_to_string(path).map_err(GimbalError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GimbalError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GimbalError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GimbalError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GimbalError::Io)?;
        }
        std::fs::write(path, content).map_err(GimbalError::Io)
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
        let opts = ControlOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: ControlOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[pan]
max_speed = 8.0
";
        let opts: ControlOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.pan.max_speed, 8.0);
        // Everything else should be default
        assert_eq!(opts.pan.acceleration, 0.25);
        assert_eq!(opts.zoom, ZoomOptions::default());
    }

    #[test]
    fn documented_defaults() {
        let opts = ControlOptions::default();
        assert_eq!(opts.zoom.scale, 0.1);
        assert_eq!(opts.zoom.min, 10.0);
        assert_eq!(opts.zoom.max, 100.0);
        assert_eq!(opts.zoom.snap, 0.1);
        assert_eq!(opts.pan.max_speed, 2.0);
        assert_eq!(opts.pan.acceleration, 0.25);
        assert_eq!(opts.pan.deceleration, 0.75);
        assert_eq!(opts.pan.snap, 0.1);
    }

    #[test]
    fn schema_exposes_both_sections() {
        let schema = serde_json::to_value(ControlOptions::json_schema())
            .unwrap()
            .to_string();
        assert!(schema.contains("zoom"));
        assert!(schema.contains("pan"));
    }
}
