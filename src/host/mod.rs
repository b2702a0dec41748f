//! The visualization host capability.
//!
//! The annotation engine never renders anything itself. It issues
//! declarative requests (load, select, color, show, export) through
//! [`VisualizationHost`]; the host owns the structure session. Two
//! implementations ship with the crate:
//!
//! - [`PmlScriptHost`] renders every request as a PyMOL command and writes
//!   the resulting `.pml` script.
//! - [`RecordingHost`] keeps the requests in memory for tests and dry runs.

mod recording;
mod script;

use std::{fmt, path::Path};

pub use recording::{HostCall, RecordingHost};
pub use script::PmlScriptHost;

use crate::view::ViewMatrix;

/// Result of a single host operation.
pub type HostResult = Result<(), HostError>;

/// A host-side failure (rejected expression, unusable path, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    /// Host operation that failed (`select`, `export_image`, ...).
    pub op: String,
    /// Host-provided reason.
    pub message: String,
}

impl HostError {
    /// New error for operation `op`.
    #[must_use]
    pub fn new(op: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.op, self.message)
    }
}

impl std::error::Error for HostError {}

/// Value for a host setting.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    /// Integer setting (modes, toggles).
    Int(i32),
    /// Floating-point setting.
    Float(f32),
    /// RGB triple in `[0, 1]`.
    Rgb([f32; 3]),
    /// Named value, e.g. a color name.
    Name(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Rgb([r, g, b]) => write!(f, "[{r}, {g}, {b}]"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Which clipping plane to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipPlane {
    /// Near plane.
    Near,
    /// Far plane.
    Far,
}

impl ClipPlane {
    /// Host keyword for the plane.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Near => "near",
            Self::Far => "far",
        }
    }
}

/// Capabilities consumed from the external visualization host.
///
/// The host is one shared mutable session. Callers hold it by exclusive
/// borrow for a whole pass; nothing here is safe to interleave.
pub trait VisualizationHost {
    /// Load a structure file into the session.
    fn load_structure(&mut self, path: &Path) -> HostResult;

    /// Hide every representation of everything.
    fn hide_all(&mut self) -> HostResult;

    /// Show the surface representation (`None` = everything).
    fn show_surface(&mut self, target: Option<&str>) -> HostResult;

    /// Show the cartoon representation (`None` = everything).
    fn show_cartoon(&mut self, target: Option<&str>) -> HostResult;

    /// Set a host setting, globally or for `target`.
    fn set_property(
        &mut self,
        name: &str,
        value: &SettingValue,
        target: Option<&str>,
    ) -> HostResult;

    /// Switch the color space (`rgb`, `cmyk`, `pymol`).
    fn set_color_space(&mut self, space: &str) -> HostResult;

    /// Define (or redefine) a named selection.
    fn select(&mut self, name: &str, expression: &str) -> HostResult;

    /// Color atoms of `target`.
    fn color(&mut self, color: &str, target: &str) -> HostResult;

    /// Color the surface of `target`.
    fn set_surface_color(&mut self, color: &str, target: &str) -> HostResult;

    /// Delete every object and selection.
    fn delete_all(&mut self) -> HostResult;

    /// Clear the active selection indicator.
    fn deselect_all(&mut self) -> HostResult;

    /// Set the camera from an 18-value view matrix.
    fn set_camera(&mut self, view: &ViewMatrix) -> HostResult;

    /// Zoom onto everything visible with `buffer` Å of margin.
    fn zoom_to_visible(&mut self, buffer: f32) -> HostResult;

    /// Move a clipping plane by `offset`.
    fn clip_plane(&mut self, plane: ClipPlane, offset: f32) -> HostResult;

    /// Write the current view as a PNG.
    fn export_image(&mut self, path: &Path, dpi: u32) -> HostResult;
}
