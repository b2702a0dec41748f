//! Per-sequence annotation passes against a visualization host.
//!
//! A pass owns the host session for its whole duration: reset, base scene,
//! resolve, apply, export. Sequences in a batch are serialized through the
//! same host one at a time.

use std::path::{Path, PathBuf};

use crate::{
    apply::apply_layers,
    catalog::{bare_subclade, Catalog},
    error::AnnotateError,
    host::{ClipPlane, SettingValue, VisualizationHost},
    options::Options,
    output::{build_identifier, image_path},
    resolve::{AnnotationRequest, Resolution, Resolver},
    view::View,
};

/// One sequence to annotate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceJob {
    /// Resolution input.
    pub request: AnnotationRequest,
    /// Structure file loaded into the host.
    pub structure: PathBuf,
    /// Protein label overriding `export.protein`.
    pub protein: Option<String>,
}

/// Outcome of one pass.
#[derive(Debug)]
pub struct SequenceReport {
    /// Sequence the pass was for.
    pub sequence_name: Option<String>,
    /// Images requested from the host, in export order.
    pub images: Vec<PathBuf>,
    /// Number of layers applied.
    pub layers: usize,
    /// Catalog lookups that failed (their layers were skipped).
    pub errors: Vec<AnnotateError>,
}

/// Drives annotation passes with one set of options.
#[derive(Debug, Clone)]
pub struct Annotator {
    options: Options,
    resolver: Resolver,
}

impl Annotator {
    /// Annotator over the built-in catalog.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_catalog(options, Catalog::builtin())
    }

    /// Annotator over a specific catalog.
    #[must_use]
    pub fn with_catalog(options: Options, catalog: Catalog) -> Self {
        let resolver = Resolver::from_options(catalog, &options);
        Self { options, resolver }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Resolver in effect.
    #[must_use]
    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Clear every selection, color and object left by a previous pass.
    pub fn reset_session(
        &self,
        host: &mut dyn VisualizationHost,
    ) -> Result<(), AnnotateError> {
        host.hide_all()?;
        host.color(&self.options.scene.base_color, "all")?;
        host.show_surface(None)?;
        host.show_cartoon(None)?;
        host.delete_all()?;
        Ok(())
    }

    /// Load the structure and apply the base scene settings.
    pub fn prepare_scene(
        &self,
        host: &mut dyn VisualizationHost,
        structure: &Path,
    ) -> Result<(), AnnotateError> {
        let scene = &self.options.scene;
        let base = SettingValue::Name(scene.base_color.clone());

        host.load_structure(structure)?;
        host.hide_all()?;
        host.show_surface(None)?;
        host.show_cartoon(None)?;
        host.set_property("surface_color", &base, None)?;
        host.set_property("cartoon_color", &base, None)?;
        host.set_property("bg_rgb", &SettingValue::Rgb(scene.background), None)?;
        host.set_property("ambient", &SettingValue::Float(scene.ambient), None)?;
        host.set_color_space(&scene.color_space)?;
        host.set_property(
            "ray_trace_fog",
            &SettingValue::Int(scene.ray_trace_fog),
            None,
        )?;
        host.set_property("depth_cue", &SettingValue::Int(scene.depth_cue), None)?;
        host.set_property(
            "ray_trace_mode",
            &SettingValue::Int(scene.ray_trace_mode),
            None,
        )?;
        host.set_property(
            "ray_trace_gain",
            &SettingValue::Float(scene.ray_trace_gain),
            None,
        )?;
        Ok(())
    }

    /// Frame `view` and export it to `{output_root}/{protein}/…`.
    pub fn export_view(
        &self,
        host: &mut dyn VisualizationHost,
        request: &AnnotationRequest,
        protein: &str,
        view: View,
    ) -> Result<PathBuf, AnnotateError> {
        let export = &self.options.export;
        let identifier = build_identifier(
            request.sequence_name.as_deref(),
            protein,
            &request.clade,
            request.subclade.as_deref().map(bare_subclade),
            view,
        );
        let dir = export.output_root.join(protein);
        std::fs::create_dir_all(&dir)?;
        let path = image_path(&export.output_root, protein, &identifier);

        host.set_camera(view.matrix())?;
        // Selection indicators would show up in the image.
        host.deselect_all()?;
        host.zoom_to_visible(export.zoom_buffer)?;
        host.clip_plane(ClipPlane::Near, export.near_clip)?;
        host.clip_plane(ClipPlane::Far, export.far_clip)?;
        host.export_image(&path, export.dpi)?;
        log::info!("image saved to {}", path.display());
        Ok(path)
    }

    /// Full pass: reset, base scene, resolve, apply, export every view.
    ///
    /// Catalog lookup failures are logged and reported in the returned
    /// report; host failures abort the pass.
    pub fn process_sequence(
        &self,
        host: &mut dyn VisualizationHost,
        job: &SequenceJob,
    ) -> Result<SequenceReport, AnnotateError> {
        let request = &job.request;
        log::info!(
            "annotating {} ({} clade {}{})",
            request.sequence_name.as_deref().unwrap_or("<unnamed>"),
            request.strain,
            request.clade,
            request
                .subclade
                .as_deref()
                .map(|s| format!(", subclade {}", bare_subclade(s)))
                .unwrap_or_default()
        );

        self.reset_session(host)?;
        self.prepare_scene(host, &job.structure)?;
        let resolution = self.resolver.resolve(request);
        log_errors(&resolution);
        apply_layers(&resolution.layers, host)?;

        let protein = job
            .protein
            .as_deref()
            .unwrap_or(&self.options.export.protein);
        let mut images = Vec::with_capacity(self.options.export.views.len());
        for &view in &self.options.export.views {
            images.push(self.export_view(host, request, protein, view)?);
        }

        Ok(SequenceReport {
            sequence_name: request.sequence_name.clone(),
            images,
            layers: resolution.layers.len(),
            errors: resolution.errors,
        })
    }

    /// Label-only pass: antigenic sites and mutations, no clade layers and
    /// no export. The session is left showing the result.
    pub fn label_sequence(
        &self,
        host: &mut dyn VisualizationHost,
        job: &SequenceJob,
    ) -> Result<SequenceReport, AnnotateError> {
        self.reset_session(host)?;
        self.prepare_scene(host, &job.structure)?;
        let resolution = self.resolver.resolve_labels(&job.request);
        log_errors(&resolution);
        apply_layers(&resolution.layers, host)?;
        Ok(SequenceReport {
            sequence_name: job.request.sequence_name.clone(),
            images: Vec::new(),
            layers: resolution.layers.len(),
            errors: resolution.errors,
        })
    }

    /// Process `jobs` one at a time through `host`. Stops at the first host
    /// failure.
    pub fn process_batch(
        &self,
        host: &mut dyn VisualizationHost,
        jobs: &[SequenceJob],
    ) -> Result<Vec<SequenceReport>, AnnotateError> {
        let mut reports = Vec::with_capacity(jobs.len());
        for job in jobs {
            reports.push(self.process_sequence(host, job)?);
        }
        log::info!("batch finished: {} sequence(s)", reports.len());
        Ok(reports)
    }
}

fn log_errors(resolution: &Resolution) {
    for err in &resolution.errors {
        log::warn!("{err}; dependent layers skipped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        host::{HostCall, RecordingHost},
        resolve::MutationSet,
        selection::parse_residues,
    };

    fn options_in(dir: &Path) -> Options {
        let mut options = Options::default();
        options.export.output_root = dir.to_path_buf();
        options
    }

    fn job(name: &str, clade: &str, subclade: Option<&str>) -> SequenceJob {
        SequenceJob {
            request: AnnotationRequest {
                sequence_name: Some(name.to_owned()),
                strain: "H1N1".to_owned(),
                clade: clade.to_owned(),
                subclade: subclade.map(str::to_owned),
                mutations: MutationSet::new(
                    parse_residues("145+188").unwrap(),
                    parse_residues("100").unwrap(),
                ),
            },
            structure: PathBuf::from("4lxv-assembly1.cif"),
            protein: None,
        }
    }

    #[test]
    fn pass_starts_with_reset_and_exports_both_views() {
        let dir = tempfile::tempdir().unwrap();
        let annotator = Annotator::new(options_in(dir.path()));
        let mut host = RecordingHost::new();
        let report = annotator
            .process_sequence(&mut host, &job("AAID1", "5a.2a", Some("C.1.9")))
            .unwrap();

        assert_eq!(host.calls()[0], HostCall::HideAll);
        assert_eq!(
            host.calls()[1],
            HostCall::Color {
                color: "grey70".to_owned(),
                target: "all".to_owned(),
            }
        );
        assert!(report.errors.is_empty());
        assert_eq!(report.layers, 8);
        assert_eq!(
            report.images,
            vec![
                dir.path().join("H1").join("AAID1_H1_5a2a_C19_side.png"),
                dir.path().join("H1").join("AAID1_H1_5a2a_C19_top.png"),
            ]
        );
        assert!(dir.path().join("H1").is_dir());
    }

    #[test]
    fn export_sequence_matches_figure_recipe() {
        let dir = tempfile::tempdir().unwrap();
        let annotator = Annotator::new(options_in(dir.path()));
        let mut host = RecordingHost::new();
        let req = job("AAID1", "5a.2", None).request;
        let path = annotator
            .export_view(&mut host, &req, "H1", View::Top)
            .unwrap();
        assert_eq!(
            host.calls(),
            [
                HostCall::Camera(Box::new(*View::Top.matrix())),
                HostCall::DeselectAll,
                HostCall::ZoomVisible(0.0),
                HostCall::Clip(ClipPlane::Near, -5.0),
                HostCall::Clip(ClipPlane::Far, 5.0),
                HostCall::Export { path, dpi: 300 },
            ]
        );
    }

    #[test]
    fn catalog_errors_do_not_abort_the_pass() {
        let dir = tempfile::tempdir().unwrap();
        let annotator = Annotator::new(options_in(dir.path()));
        let mut host = RecordingHost::new();
        let report = annotator
            .process_sequence(&mut host, &job("AAID2", "5a.2", Some("D")))
            .unwrap();
        assert!(matches!(
            report.errors.as_slice(),
            [AnnotateError::SubcladeMismatch { .. }]
        ));
        assert_eq!(report.images.len(), 2);
        assert!(host.selections().contains(&"AAID2"));
        assert!(!host.selections().contains(&"Subclade_D"));
    }

    #[test]
    fn prefixed_subclade_is_bare_in_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let annotator = Annotator::new(options_in(dir.path()));
        let mut host = RecordingHost::new();
        let report = annotator
            .process_sequence(
                &mut host,
                &job("S1", "5a.2a.1", Some("Subclade_D.1")),
            )
            .unwrap();
        assert!(report.images[0].ends_with("S1_H1_5a2a1_D1_side.png"));
    }

    #[test]
    fn host_failure_aborts_before_export() {
        let dir = tempfile::tempdir().unwrap();
        let annotator = Annotator::new(options_in(dir.path()));
        let mut host = RecordingHost::failing_on(HostCall::ShowSurface(Some(
            "site_Ca1".to_owned(),
        )));
        let err = annotator
            .process_sequence(&mut host, &job("AAID1", "5a.2a", None))
            .unwrap_err();
        assert!(matches!(err, AnnotateError::Host(_)));
        assert!(!host
            .calls()
            .iter()
            .any(|call| matches!(call, HostCall::Export { .. })));
    }

    #[test]
    fn label_pass_skips_clade_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let annotator = Annotator::new(options_in(dir.path()));
        let mut host = RecordingHost::new();
        let mut labelled = job("test", "ignored", None);
        labelled.request.mutations =
            MutationSet::new(parse_residues("142+189").unwrap(), Vec::new())
                .with_color("tv_red");
        let report = annotator.label_sequence(&mut host, &labelled).unwrap();
        assert!(report.images.is_empty());
        assert!(report.errors.is_empty());
        assert_eq!(
            host.selections(),
            vec!["site_Sa", "site_Sb", "site_Ca1", "site_Ca2", "site_Cb", "test"]
        );
    }

    #[test]
    fn batch_resets_between_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let annotator = Annotator::new(options_in(dir.path()));
        let mut host = RecordingHost::new();
        let jobs = [
            job("A1", "5a.2a", Some("C.1.8")),
            job("A2", "5a.2a.1", Some("D.3")),
        ];
        let reports = annotator.process_batch(&mut host, &jobs).unwrap();
        assert_eq!(reports.len(), 2);
        let deletes = host
            .calls()
            .iter()
            .filter(|call| **call == HostCall::DeleteAll)
            .count();
        assert_eq!(deletes, 2);
        assert_eq!(
            host.calls()
                .iter()
                .filter(|call| matches!(call, HostCall::Load(_)))
                .count(),
            2
        );
    }

    #[test]
    fn protein_override_changes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let annotator = Annotator::new(options_in(dir.path()));
        let mut host = RecordingHost::new();
        let mut h3 = job("X", "2b", None);
        h3.request.strain = "H3N2".to_owned();
        h3.protein = Some("H3".to_owned());
        let report = annotator.process_sequence(&mut host, &h3).unwrap();
        assert!(report.errors.is_empty());
        assert_eq!(
            report.images[1],
            dir.path().join("H3").join("X_H3_2b_top.png")
        );
    }
}
