use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pan", inline)]
#[serde(default)]
/// Pan model tuning; `deceleration` and `snap` are shared with the
/// orbit model's angular damping.
///
/// A `max_speed` of zero pins the pan velocity regardless of input.
pub struct PanOptions {
    /// Speed limit per axis, in world units per frame.
    #[schemars(title = "Pan Speed", range(min = 0.0, max = 20.0), extend("step" = 0.25))]
    pub max_speed: f32,
    /// Velocity gained per unit of pan input.
    #[schemars(title = "Pan Acceleration", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub acceleration: f32,
    /// Per-frame velocity decay factor in `[0, 1]`.
    #[schemars(title = "Pan Deceleration", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub deceleration: f32,
    /// Velocity magnitude below which motion snaps to rest.
    #[schemars(skip)]
    pub snap: f32,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            max_speed: 2.0,
            acceleration: 0.25,
            deceleration: 0.75,
            snap: 0.1,
        }
    }
}
