//! Annotation resolution: catalog walk → ordered annotation layers.
//!
//! Layers come out in a fixed order (antigenic sites, clade, subclade,
//! mutations). The host applies them in that order, so later layers win on
//! overlapping residues and mutation highlights always end up on top.
//!
//! Catalog lookup failures (unknown strain, unknown clade, subclade under
//! the wrong clade) only drop the layers that depended on the lookup. They
//! are recorded in [`Resolution::errors`] and the remaining steps still run.

use serde::{Serialize, Serializer};

use crate::{
    catalog::{subclade_key, Catalog, ChainResidues, StrainCatalog},
    error::AnnotateError,
    options::Options,
    selection::{build_expression, combine_all, ResidueSpec},
    strain::StrainType,
};

/// Default mutation highlight color.
pub const DEFAULT_MUTATION_COLOR: &str = "grey20";

/// Layer name used for mutation highlights when no sequence name is given.
pub const DEFAULT_MUTATION_LAYER: &str = "mutations";

/// What an annotation layer represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// One antigenic site.
    Site,
    /// Clade-defining residues.
    Clade,
    /// Subclade-defining residues.
    Subclade,
    /// Per-sequence mutation highlights.
    Mutation,
}

/// One named, colored, residue-scoped display instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationLayer {
    /// Layer category.
    pub kind: LayerKind,
    /// Selection name on the host.
    pub name: String,
    /// Structure-query expression.
    pub expression: String,
    /// Host color name.
    pub color: String,
}

/// Per-sequence mutation lists for the two HA subunits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationSet {
    /// HA1 residues.
    pub ha1: Vec<ResidueSpec>,
    /// HA2 residues.
    pub ha2: Vec<ResidueSpec>,
    /// Highlight color.
    pub color: String,
}

impl Default for MutationSet {
    fn default() -> Self {
        Self {
            ha1: Vec::new(),
            ha2: Vec::new(),
            color: DEFAULT_MUTATION_COLOR.to_owned(),
        }
    }
}

impl MutationSet {
    /// Mutation lists with the default highlight color.
    #[must_use]
    pub fn new(ha1: Vec<ResidueSpec>, ha2: Vec<ResidueSpec>) -> Self {
        Self {
            ha1,
            ha2,
            ..Self::default()
        }
    }

    /// Override the highlight color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Whether neither subunit has any mutation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ha1.is_empty() && self.ha2.is_empty()
    }
}

/// Everything needed to resolve one annotation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationRequest {
    /// Sequence name; names the mutation layer and prefixes output files.
    pub sequence_name: Option<String>,
    /// Strain name as given by the caller (validated during resolution).
    pub strain: String,
    /// Clade name, e.g. `5a.2a`.
    pub clade: String,
    /// Optional subclade, bare (`C.1.9`) or prefixed (`Subclade_C.1.9`).
    pub subclade: Option<String>,
    /// Mutation highlights.
    pub mutations: MutationSet,
}

/// Ordered layers plus the catalog errors recorded while building them.
#[derive(Debug, Default, Serialize)]
pub struct Resolution {
    /// Layers in application order.
    pub layers: Vec<AnnotationLayer>,
    /// Lookup failures that dropped some layers.
    #[serde(serialize_with = "errors_as_strings")]
    pub errors: Vec<AnnotateError>,
}

fn errors_as_strings<S: Serializer>(
    errors: &[AnnotateError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

impl Resolution {
    /// Whether every lookup succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Kinds of the produced layers, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(|layer| layer.kind).collect()
    }

    /// Strict view: the layers if nothing failed, otherwise the first
    /// recorded error.
    pub fn into_result(self) -> Result<Vec<AnnotationLayer>, AnnotateError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.layers),
        }
    }
}

/// Walks the catalog and synthesizes annotation layers.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
    clade_color: String,
    subclade_color: String,
    ha1_chains: String,
    ha2_chains: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::from_options(Catalog::builtin(), &Options::default())
    }
}

impl Resolver {
    /// Resolver over `catalog` using the colors and chain aliases from
    /// `options`.
    #[must_use]
    pub fn from_options(catalog: Catalog, options: &Options) -> Self {
        Self {
            catalog,
            clade_color: options.colors.clade.clone(),
            subclade_color: options.colors.subclade.clone(),
            ha1_chains: options.chains.ha1.clone(),
            ha2_chains: options.chains.ha2.clone(),
        }
    }

    /// The catalog this resolver walks.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a full pass: sites, clade, subclade, mutations.
    #[must_use]
    pub fn resolve(&self, request: &AnnotationRequest) -> Resolution {
        let mut resolution = Resolution::default();

        if let Some(entry) = self.strain_entry(&request.strain, &mut resolution)
        {
            push_site_layers(entry, &mut resolution);
            self.push_clade_layers(entry, request, &mut resolution);
        }
        self.push_mutation_layer(request, &mut resolution);

        log::debug!(
            "resolved {} layer(s) for {} {} ({} error(s))",
            resolution.layers.len(),
            request.strain,
            request.clade,
            resolution.errors.len()
        );
        resolution
    }

    /// Resolve a label-only pass: antigenic sites and mutations, no clade
    /// annotation.
    #[must_use]
    pub fn resolve_labels(&self, request: &AnnotationRequest) -> Resolution {
        let mut resolution = Resolution::default();
        if let Some(entry) = self.strain_entry(&request.strain, &mut resolution)
        {
            push_site_layers(entry, &mut resolution);
        }
        self.push_mutation_layer(request, &mut resolution);
        resolution
    }

    fn strain_entry(
        &self,
        strain: &str,
        resolution: &mut Resolution,
    ) -> Option<&'static StrainCatalog> {
        let parsed = match strain.parse::<StrainType>() {
            Ok(parsed) => parsed,
            Err(err) => {
                resolution.errors.push(err);
                return None;
            }
        };
        let entry = self.catalog.strain(parsed);
        if entry.is_none() {
            resolution
                .errors
                .push(AnnotateError::UnknownStrain(parsed.to_string()));
        }
        entry
    }

    fn push_clade_layers(
        &self,
        entry: &StrainCatalog,
        request: &AnnotationRequest,
        resolution: &mut Resolution,
    ) {
        let Some(clade) = entry.clade(request.clade.trim()) else {
            resolution.errors.push(AnnotateError::UnknownClade {
                strain: entry.strain.to_string(),
                clade: request.clade.clone(),
            });
            return;
        };
        push_chain_layer(
            resolution,
            LayerKind::Clade,
            clade.name,
            clade.chains,
            &self.clade_color,
        );

        let Some(requested) = request
            .subclade
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        else {
            return;
        };
        match clade.subclade(requested) {
            Some(sub) => push_chain_layer(
                resolution,
                LayerKind::Subclade,
                sub.name,
                sub.chains,
                &self.subclade_color,
            ),
            None => {
                resolution.errors.push(AnnotateError::SubcladeMismatch {
                    clade: clade.name.to_owned(),
                    subclade: subclade_key(requested).into_owned(),
                    found_under: entry
                        .subclade_parent(requested)
                        .map(|parent| parent.name.to_owned()),
                });
            }
        }
    }

    fn push_mutation_layer(
        &self,
        request: &AnnotationRequest,
        resolution: &mut Resolution,
    ) {
        let mutations = &request.mutations;
        let mut expressions = Vec::with_capacity(2);
        for (chains, residues) in [
            (&self.ha1_chains, &mutations.ha1),
            (&self.ha2_chains, &mutations.ha2),
        ] {
            if residues.is_empty() {
                continue;
            }
            match build_expression(chains, residues) {
                Ok(expr) => expressions.push(expr),
                Err(err) => resolution.errors.push(err),
            }
        }
        if let Some(expression) = combine_all(&expressions) {
            resolution.layers.push(AnnotationLayer {
                kind: LayerKind::Mutation,
                name: request
                    .sequence_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MUTATION_LAYER.to_owned()),
                expression,
                color: mutations.color.clone(),
            });
        }
    }
}

fn push_site_layers(entry: &StrainCatalog, resolution: &mut Resolution) {
    for site in entry.sites {
        match build_expression(site.chain_group, site.residues) {
            Ok(expression) => resolution.layers.push(AnnotationLayer {
                kind: LayerKind::Site,
                name: site.name.to_owned(),
                expression,
                color: site.color.to_owned(),
            }),
            Err(err) => resolution.errors.push(err),
        }
    }
}

/// One layer covering every chain group of a clade or subclade entry.
fn push_chain_layer(
    resolution: &mut Resolution,
    kind: LayerKind,
    name: &str,
    chains: &[ChainResidues],
    color: &str,
) {
    let mut expressions = Vec::with_capacity(chains.len());
    for group in chains {
        match build_expression(group.chain_group, group.residues) {
            Ok(expr) => expressions.push(expr),
            Err(err) => resolution.errors.push(err),
        }
    }
    if let Some(expression) = combine_all(&expressions) {
        resolution.layers.push(AnnotationLayer {
            kind,
            name: name.to_owned(),
            expression,
            color: color.to_owned(),
        });
    }
}
