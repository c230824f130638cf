use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Zoom model tuning.
///
/// Values are accepted as given: an inverted range (`min > max`) pins
/// the zoom target at `min`, and a zero `scale` freezes zoom entirely.
pub struct ZoomOptions {
    /// Fraction of the remaining zoom gap closed per frame; also scales
    /// incoming wheel deltas.
    #[schemars(title = "Zoom Scale", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub scale: f32,
    /// Nearest allowed resting depth.
    pub min: f32,
    /// Farthest allowed resting depth.
    pub max: f32,
    /// Gap magnitude below which the zoom locks onto its target.
    #[schemars(skip)]
    pub snap: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            scale: 0.1,
            min: 10.0,
            max: 100.0,
            snap: 0.1,
        }
    }
}
