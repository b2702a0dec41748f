use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Base scene configuration applied after loading the structure.
pub struct SceneOptions {
    /// Color of unannotated surface and cartoon.
    #[schemars(title = "Base Color")]
    pub base_color: String,
    /// Background RGB.
    #[schemars(title = "Background")]
    pub background: [f32; 3],
    /// Ambient light level.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub ambient: f32,
    /// Host color space (`cmyk` keeps print-safe colors).
    #[schemars(title = "Color Space")]
    pub color_space: String,
    /// Ray-traced fog (0 disables).
    #[schemars(skip)]
    pub ray_trace_fog: i32,
    /// Depth cueing (1 enables).
    #[schemars(skip)]
    pub depth_cue: i32,
    /// Ray trace mode (1 = normal color plus black outline).
    #[schemars(title = "Ray Trace Mode", range(min = 0, max = 3))]
    pub ray_trace_mode: i32,
    /// Outline gain for ray trace mode 1.
    #[schemars(skip)]
    pub ray_trace_gain: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            base_color: "grey70".to_owned(),
            background: [1.0, 1.0, 1.0],
            ambient: 0.4,
            color_space: "cmyk".to_owned(),
            ray_trace_fog: 0,
            depth_cue: 1,
            ray_trace_mode: 1,
            ray_trace_gain: 0.002,
        }
    }
}
