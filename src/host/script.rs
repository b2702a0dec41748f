//! PyMOL command-script host.
//!
//! Each request becomes one `.pml` command line. Running the saved script
//! inside PyMOL (`@annotate.pml` or `pymol -cq annotate.pml`) replays the
//! pass and writes the PNGs.

use std::path::Path;

use super::{ClipPlane, HostError, HostResult, SettingValue, VisualizationHost};
use crate::view::ViewMatrix;

/// Host that accumulates PyMOL commands.
#[derive(Debug, Default, Clone)]
pub struct PmlScriptHost {
    lines: Vec<String>,
}

impl PmlScriptHost {
    /// Empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The script text (one command per line).
    #[must_use]
    pub fn script(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Write the script to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.script())?;
        log::info!(
            "wrote {} PyMOL command(s) to {}",
            self.lines.len(),
            path.display()
        );
        Ok(())
    }

    fn emit(&mut self, line: String) -> HostResult {
        self.lines.push(line);
        Ok(())
    }
}

fn check_name(op: &str, name: &str) -> HostResult {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_.-+".contains(c));
    if valid {
        Ok(())
    } else {
        Err(HostError::new(op, format!("invalid object name '{name}'")))
    }
}

fn check_expression(expression: &str) -> HostResult {
    if expression.trim().is_empty() {
        return Err(HostError::new("select", "empty expression"));
    }
    if expression.contains(['\n', '\r', ';']) {
        return Err(HostError::new(
            "select",
            format!("expression '{expression}' spans several commands"),
        ));
    }
    let mut depth = 0_i32;
    for c in expression.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    break;
                }
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(HostError::new(
            "select",
            format!("unbalanced parentheses in '{expression}'"),
        ))
    }
}

/// Paths are written unquoted; argument separators would split the command.
fn path_arg(op: &str, path: &Path) -> Result<String, HostError> {
    let text = path.to_str().ok_or_else(|| {
        HostError::new(op, format!("non UTF-8 path {}", path.display()))
    })?;
    if text.contains([',', ';', '\n', '\r']) {
        return Err(HostError::new(
            op,
            format!("path '{text}' contains a command separator"),
        ));
    }
    Ok(text.to_owned())
}

fn target_suffix(target: Option<&str>) -> String {
    target.map(|t| format!(", {t}")).unwrap_or_default()
}

impl VisualizationHost for PmlScriptHost {
    fn load_structure(&mut self, path: &Path) -> HostResult {
        let path = path_arg("load", path)?;
        self.emit(format!("load {path}"))
    }

    fn hide_all(&mut self) -> HostResult {
        self.emit("hide everything".to_owned())
    }

    fn show_surface(&mut self, target: Option<&str>) -> HostResult {
        if let Some(name) = target {
            check_name("show", name)?;
        }
        self.emit(format!("show surface{}", target_suffix(target)))
    }

    fn show_cartoon(&mut self, target: Option<&str>) -> HostResult {
        if let Some(name) = target {
            check_name("show", name)?;
        }
        self.emit(format!("show cartoon{}", target_suffix(target)))
    }

    fn set_property(
        &mut self,
        name: &str,
        value: &SettingValue,
        target: Option<&str>,
    ) -> HostResult {
        check_name("set", name)?;
        self.emit(format!("set {name}, {value}{}", target_suffix(target)))
    }

    fn set_color_space(&mut self, space: &str) -> HostResult {
        check_name("space", space)?;
        self.emit(format!("space {space}"))
    }

    fn select(&mut self, name: &str, expression: &str) -> HostResult {
        check_name("select", name)?;
        check_expression(expression)?;
        self.emit(format!("select {name}, {expression}"))
    }

    fn color(&mut self, color: &str, target: &str) -> HostResult {
        check_name("color", color)?;
        check_name("color", target)?;
        self.emit(format!("color {color}, {target}"))
    }

    fn set_surface_color(&mut self, color: &str, target: &str) -> HostResult {
        check_name("set", color)?;
        check_name("set", target)?;
        self.emit(format!("set surface_color, {color}, {target}"))
    }

    fn delete_all(&mut self) -> HostResult {
        self.emit("delete all".to_owned())
    }

    fn deselect_all(&mut self) -> HostResult {
        self.emit("deselect".to_owned())
    }

    fn set_camera(&mut self, view: &ViewMatrix) -> HostResult {
        let values = view
            .iter()
            .map(|v| format!("{v:.9}"))
            .collect::<Vec<_>>()
            .join(", ");
        self.emit(format!("set_view ({values})"))
    }

    fn zoom_to_visible(&mut self, buffer: f32) -> HostResult {
        self.emit(format!("zoom visible, buffer={buffer}"))
    }

    fn clip_plane(&mut self, plane: ClipPlane, offset: f32) -> HostResult {
        self.emit(format!("clip {}, {offset}", plane.as_str()))
    }

    fn export_image(&mut self, path: &Path, dpi: u32) -> HostResult {
        let path = path_arg("png", path)?;
        self.emit(format!("png {path}, dpi={dpi}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;

    #[test]
    fn separator_in_path_is_rejected() {
        let mut host = PmlScriptHost::new();
        let err = host
            .export_image(Path::new("runs, v2/H1/x_side.png"), 300)
            .unwrap_err();
        assert_eq!(err.op, "png");
        assert!(host
            .load_structure(Path::new("a;delete all.cif"))
            .is_err());
        assert!(host.lines().is_empty());
    }

    #[test]
    fn layer_commands_match_pymol_syntax() {
        let mut host = PmlScriptHost::new();
        host.select("site_Cb", "chain A+C+E and resi 70-75").unwrap();
        host.color("lightorange", "site_Cb").unwrap();
        host.show_surface(Some("site_Cb")).unwrap();
        host.set_surface_color("lightorange", "site_Cb").unwrap();
        assert_eq!(
            host.lines(),
            [
                "select site_Cb, chain A+C+E and resi 70-75",
                "color lightorange, site_Cb",
                "show surface, site_Cb",
                "set surface_color, lightorange, site_Cb",
            ]
        );
    }

    #[test]
    fn rejects_unbalanced_expression() {
        let mut host = PmlScriptHost::new();
        let err = host
            .select("AAID1", "(chain A+C+E and resi 142")
            .unwrap_err();
        assert_eq!(err.op, "select");
        assert!(host.lines().is_empty());
        assert!(host.select("x", "chain A) and (resi 1").is_err());
    }

    #[test]
    fn rejects_names_with_spaces() {
        let mut host = PmlScriptHost::new();
        assert!(host.select("my seq", "chain A and resi 1").is_err());
        assert!(host.color("grey20", "").is_err());
    }

    #[test]
    fn settings_and_export_lines() {
        let mut host = PmlScriptHost::new();
        host.set_property("bg_rgb", &SettingValue::Rgb([1.0, 1.0, 1.0]), None)
            .unwrap();
        host.clip_plane(ClipPlane::Near, -5.0).unwrap();
        host.zoom_to_visible(0.0).unwrap();
        host.export_image(Path::new("out/H1/a_side.png"), 300).unwrap();
        assert_eq!(
            host.lines(),
            [
                "set bg_rgb, [1, 1, 1]",
                "clip near, -5",
                "zoom visible, buffer=0",
                "png out/H1/a_side.png, dpi=300",
            ]
        );
    }

    #[test]
    fn set_view_has_eighteen_values() {
        let mut host = PmlScriptHost::new();
        host.set_camera(View::Side.matrix()).unwrap();
        let line = &host.lines()[0];
        assert!(line.starts_with("set_view (0.888682842, "));
        assert_eq!(line.matches(", ").count(), 17);
    }

    #[test]
    fn save_writes_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("annotate.pml");
        let mut host = PmlScriptHost::new();
        host.delete_all().unwrap();
        host.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "delete all\n");
    }
}
