//! Replays resolved layers against a visualization host.

use crate::{
    error::AnnotateError, host::VisualizationHost, resolve::AnnotationLayer,
};

/// Apply `layers` in order: select, color, show surface, color surface.
///
/// Later layers overwrite earlier ones on shared residues. The first host
/// failure stops the pass; already-applied layers stay on the host and the
/// caller is expected to reset the session before retrying.
pub fn apply_layers(
    layers: &[AnnotationLayer],
    host: &mut dyn VisualizationHost,
) -> Result<(), AnnotateError> {
    for layer in layers {
        log::debug!(
            "applying {:?} layer '{}' ({}): {}",
            layer.kind,
            layer.name,
            layer.color,
            layer.expression
        );
        host.select(&layer.name, &layer.expression)?;
        host.color(&layer.color, &layer.name)?;
        host.show_surface(Some(&layer.name))?;
        host.set_surface_color(&layer.color, &layer.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        host::{HostCall, RecordingHost},
        resolve::{AnnotationRequest, LayerKind, MutationSet, Resolver},
        selection::ResidueSpec,
    };

    fn overlapping_request() -> AnnotationRequest {
        // 189 is both clade-defining for 5a.2a and mutated here.
        AnnotationRequest {
            sequence_name: Some("AAID1".to_owned()),
            strain: "H1N1".to_owned(),
            clade: "5a.2a".to_owned(),
            subclade: Some("C.1.9".to_owned()),
            mutations: MutationSet::new(vec![ResidueSpec::Single(189)], vec![])
                .with_color("tv_red"),
        }
    }

    fn surface_colors(host: &RecordingHost) -> Vec<(String, String)> {
        host.calls()
            .iter()
            .filter_map(|call| match call {
                HostCall::SurfaceColor { color, target } => {
                    Some((target.clone(), color.clone()))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn each_layer_issues_four_calls() {
        let resolution = Resolver::default().resolve(&overlapping_request());
        let mut host = RecordingHost::new();
        apply_layers(&resolution.layers, &mut host).unwrap();
        assert_eq!(host.calls().len(), resolution.layers.len() * 4);
        assert_eq!(
            host.calls()[..4],
            [
                HostCall::Select {
                    name: "site_Sa".to_owned(),
                    expression: "chain A+C+E and resi 124-125+153-157+159-164"
                        .to_owned(),
                },
                HostCall::Color {
                    color: "lightpink".to_owned(),
                    target: "site_Sa".to_owned(),
                },
                HostCall::ShowSurface(Some("site_Sa".to_owned())),
                HostCall::SurfaceColor {
                    color: "lightpink".to_owned(),
                    target: "site_Sa".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn mutation_color_is_applied_after_clade_color() {
        let resolution = Resolver::default().resolve(&overlapping_request());
        assert_eq!(
            resolution.kinds()[5..],
            [LayerKind::Clade, LayerKind::Subclade, LayerKind::Mutation]
        );

        let mut host = RecordingHost::new();
        apply_layers(&resolution.layers, &mut host).unwrap();
        let colors = surface_colors(&host);
        let clade_at = colors
            .iter()
            .position(|(target, _)| target == "5a.2a")
            .unwrap();
        let mutation_at = colors
            .iter()
            .position(|(target, _)| target == "AAID1")
            .unwrap();
        assert!(clade_at < mutation_at);
        assert_eq!(
            colors.last(),
            Some(&("AAID1".to_owned(), "tv_red".to_owned()))
        );
    }

    #[test]
    fn host_failure_stops_remaining_layers() {
        let resolution = Resolver::default().resolve(&overlapping_request());
        let mut host = RecordingHost::failing_on(HostCall::Color {
            color: "tv_blue".to_owned(),
            target: "5a.2a".to_owned(),
        });
        let err = apply_layers(&resolution.layers, &mut host).unwrap_err();
        assert!(matches!(err, AnnotateError::Host(ref e) if e.op == "color"));
        // Sites went through, the clade select landed, nothing after it.
        assert_eq!(host.selections().last(), Some(&"5a.2a"));
        assert!(!host.selections().contains(&"AAID1"));
        assert_eq!(host.calls().len(), 5 * 4 + 1);
    }
}
