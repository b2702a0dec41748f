use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::view::View;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Export", inline)]
#[serde(default)]
/// Image export parameters.
pub struct ExportOptions {
    /// Root directory; images land in `{output_root}/{protein}/`.
    #[schemars(title = "Output Root")]
    pub output_root: PathBuf,
    /// Protein label used for the subdirectory and file names.
    #[schemars(title = "Protein")]
    pub protein: String,
    /// Views exported per sequence, in order.
    #[schemars(title = "Views")]
    pub views: Vec<View>,
    /// Image resolution.
    #[schemars(title = "DPI", range(min = 72, max = 1200))]
    pub dpi: u32,
    /// Zoom buffer around the visible structure (0 = tight).
    #[schemars(skip)]
    pub zoom_buffer: f32,
    /// Near clipping plane offset.
    #[schemars(skip)]
    pub near_clip: f32,
    /// Far clipping plane offset.
    #[schemars(skip)]
    pub far_clip: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("ImageOutput"),
            protein: "H1".to_owned(),
            views: View::ALL.to_vec(),
            dpi: 300,
            zoom_buffer: 0.0,
            near_clip: -5.0,
            far_clip: 5.0,
        }
    }
}
