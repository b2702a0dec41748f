//! TOML batch manifests.
//!
//! ```toml
//! structure = "4lxv-assembly1.cif"
//! strain = "H1N1"
//!
//! [[sequence]]
//! name = "AAID1"
//! clade = "5a.2a"
//! subclade = "C.1.9"
//! ha1 = [142, 189]
//! ha2 = ["100-102"]
//! ```
//!
//! Top-level `structure`, `strain` and `protein` are defaults; each
//! `[[sequence]]` may override them. Relative structure paths are resolved
//! against the manifest's directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::AnnotateError,
    options::Options,
    pipeline::SequenceJob,
    resolve::{AnnotationRequest, MutationSet},
    selection::ResidueSpec,
};

/// One `[[sequence]]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Sequence name.
    pub name: String,
    /// Clade name.
    pub clade: String,
    /// Optional subclade.
    #[serde(default)]
    pub subclade: Option<String>,
    /// HA1 mutations.
    #[serde(default)]
    pub ha1: Vec<ResidueSpec>,
    /// HA2 mutations.
    #[serde(default)]
    pub ha2: Vec<ResidueSpec>,
    /// Mutation color override.
    #[serde(default)]
    pub color: Option<String>,
    /// Structure override.
    #[serde(default)]
    pub structure: Option<PathBuf>,
    /// Strain override.
    #[serde(default)]
    pub strain: Option<String>,
    /// Protein label override.
    #[serde(default)]
    pub protein: Option<String>,
}

/// A batch of sequences sharing defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BatchManifest {
    /// Default structure file.
    #[serde(default)]
    pub structure: Option<PathBuf>,
    /// Default strain.
    #[serde(default)]
    pub strain: Option<String>,
    /// Default protein label.
    #[serde(default)]
    pub protein: Option<String>,
    /// Sequences, processed in order.
    #[serde(default, rename = "sequence")]
    pub sequences: Vec<ManifestEntry>,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl BatchManifest {
    /// Parse manifest text; relative paths resolve against `base_dir`.
    pub fn parse(text: &str, base_dir: &Path) -> Result<Self, AnnotateError> {
        let mut manifest: Self = toml::from_str(text)
            .map_err(|e| AnnotateError::OptionsParse(e.to_string()))?;
        manifest.base_dir = base_dir.to_path_buf();
        Ok(manifest)
    }

    /// Load a manifest file.
    pub fn load(path: &Path) -> Result<Self, AnnotateError> {
        let text = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&text, base_dir)
    }

    /// Expand entries into jobs, applying manifest defaults and the
    /// configured mutation color.
    pub fn jobs(&self, options: &Options) -> Result<Vec<SequenceJob>, AnnotateError> {
        self.sequences
            .iter()
            .map(|entry| self.job(entry, options))
            .collect()
    }

    fn job(
        &self,
        entry: &ManifestEntry,
        options: &Options,
    ) -> Result<SequenceJob, AnnotateError> {
        let missing = |field: &str| {
            AnnotateError::OptionsParse(format!(
                "sequence '{}' has no {field} and the manifest sets no default",
                entry.name
            ))
        };
        let structure = entry
            .structure
            .as_ref()
            .or(self.structure.as_ref())
            .ok_or_else(|| missing("structure"))?;
        let strain = entry
            .strain
            .as_ref()
            .or(self.strain.as_ref())
            .ok_or_else(|| missing("strain"))?;
        let color = entry
            .color
            .clone()
            .unwrap_or_else(|| options.colors.mutation.clone());

        Ok(SequenceJob {
            request: AnnotationRequest {
                sequence_name: Some(entry.name.clone()),
                strain: strain.clone(),
                clade: entry.clade.clone(),
                subclade: entry.subclade.clone(),
                mutations: MutationSet::new(entry.ha1.clone(), entry.ha2.clone())
                    .with_color(color),
            },
            structure: self.base_dir.join(structure),
            protein: entry.protein.clone().or_else(|| self.protein.clone()),
        })
    }
}
