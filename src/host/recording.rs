//! In-memory host that records every request.

use std::path::{Path, PathBuf};

use super::{ClipPlane, HostError, HostResult, SettingValue, VisualizationHost};
use crate::view::ViewMatrix;

/// One recorded host request.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// `load_structure`.
    Load(PathBuf),
    /// `hide_all`.
    HideAll,
    /// `show_surface`.
    ShowSurface(Option<String>),
    /// `show_cartoon`.
    ShowCartoon(Option<String>),
    /// `set_property`.
    Set {
        /// Setting name.
        name: String,
        /// Setting value.
        value: SettingValue,
        /// Optional target selection.
        target: Option<String>,
    },
    /// `set_color_space`.
    ColorSpace(String),
    /// `select`.
    Select {
        /// Selection name.
        name: String,
        /// Query expression.
        expression: String,
    },
    /// `color`.
    Color {
        /// Color name.
        color: String,
        /// Target selection.
        target: String,
    },
    /// `set_surface_color`.
    SurfaceColor {
        /// Color name.
        color: String,
        /// Target selection.
        target: String,
    },
    /// `delete_all`.
    DeleteAll,
    /// `deselect_all`.
    DeselectAll,
    /// `set_camera`.
    Camera(Box<ViewMatrix>),
    /// `zoom_to_visible`.
    ZoomVisible(f32),
    /// `clip_plane`.
    Clip(ClipPlane, f32),
    /// `export_image`.
    Export {
        /// Image path.
        path: PathBuf,
        /// Resolution.
        dpi: u32,
    },
}

/// Host that stores requests instead of executing them.
///
/// A call equal to the configured failure trigger is rejected (and not
/// recorded), which lets tests exercise mid-pass host failures.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    fail_on: Option<HostCall>,
}

impl RecordingHost {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder that rejects `call` when it is issued.
    #[must_use]
    pub fn failing_on(call: HostCall) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(call),
        }
    }

    /// Every accepted request, in order.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Names of the selections defined so far, in order.
    #[must_use]
    pub fn selections(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Select { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, op: &str, call: HostCall) -> HostResult {
        if self.fail_on.as_ref() == Some(&call) {
            return Err(HostError::new(op, "rejected by recording host"));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl VisualizationHost for RecordingHost {
    fn load_structure(&mut self, path: &Path) -> HostResult {
        self.record("load", HostCall::Load(path.to_path_buf()))
    }

    fn hide_all(&mut self) -> HostResult {
        self.record("hide", HostCall::HideAll)
    }

    fn show_surface(&mut self, target: Option<&str>) -> HostResult {
        self.record("show", HostCall::ShowSurface(target.map(str::to_owned)))
    }

    fn show_cartoon(&mut self, target: Option<&str>) -> HostResult {
        self.record("show", HostCall::ShowCartoon(target.map(str::to_owned)))
    }

    fn set_property(
        &mut self,
        name: &str,
        value: &SettingValue,
        target: Option<&str>,
    ) -> HostResult {
        self.record(
            "set",
            HostCall::Set {
                name: name.to_owned(),
                value: value.clone(),
                target: target.map(str::to_owned),
            },
        )
    }

    fn set_color_space(&mut self, space: &str) -> HostResult {
        self.record("space", HostCall::ColorSpace(space.to_owned()))
    }

    fn select(&mut self, name: &str, expression: &str) -> HostResult {
        self.record(
            "select",
            HostCall::Select {
                name: name.to_owned(),
                expression: expression.to_owned(),
            },
        )
    }

    fn color(&mut self, color: &str, target: &str) -> HostResult {
        self.record(
            "color",
            HostCall::Color {
                color: color.to_owned(),
                target: target.to_owned(),
            },
        )
    }

    fn set_surface_color(&mut self, color: &str, target: &str) -> HostResult {
        self.record(
            "set",
            HostCall::SurfaceColor {
                color: color.to_owned(),
                target: target.to_owned(),
            },
        )
    }

    fn delete_all(&mut self) -> HostResult {
        self.record("delete", HostCall::DeleteAll)
    }

    fn deselect_all(&mut self) -> HostResult {
        self.record("deselect", HostCall::DeselectAll)
    }

    fn set_camera(&mut self, view: &ViewMatrix) -> HostResult {
        self.record("set_view", HostCall::Camera(Box::new(*view)))
    }

    fn zoom_to_visible(&mut self, buffer: f32) -> HostResult {
        self.record("zoom", HostCall::ZoomVisible(buffer))
    }

    fn clip_plane(&mut self, plane: ClipPlane, offset: f32) -> HostResult {
        self.record("clip", HostCall::Clip(plane, offset))
    }

    fn export_image(&mut self, path: &Path, dpi: u32) -> HostResult {
        self.record(
            "png",
            HostCall::Export {
                path: path.to_path_buf(),
                dpi,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut host = RecordingHost::new();
        host.hide_all().unwrap();
        host.select("site_Sa", "chain A+C+E and resi 124").unwrap();
        host.show_surface(None).unwrap();
        assert_eq!(
            host.calls(),
            [
                HostCall::HideAll,
                HostCall::Select {
                    name: "site_Sa".to_owned(),
                    expression: "chain A+C+E and resi 124".to_owned(),
                },
                HostCall::ShowSurface(None),
            ]
        );
        assert_eq!(host.selections(), vec!["site_Sa"]);
        host.clear();
        assert!(host.calls().is_empty());
    }

    #[test]
    fn failure_trigger_rejects_matching_call_only() {
        let mut host = RecordingHost::failing_on(HostCall::DeleteAll);
        host.hide_all().unwrap();
        let err = host.delete_all().unwrap_err();
        assert_eq!(err.op, "delete");
        assert_eq!(host.calls(), [HostCall::HideAll]);
    }
}
