use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resolve::DEFAULT_MUTATION_COLOR;

/// Colors for clade, subclade and mutation layers. Antigenic site colors
/// are fixed by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layer Colors", inline)]
#[serde(default)]
pub struct LayerColorOptions {
    /// Clade-defining residues.
    #[schemars(title = "Clade")]
    pub clade: String,
    /// Subclade-defining residues.
    #[schemars(title = "Subclade")]
    pub subclade: String,
    /// Mutation highlights when the caller gives no color.
    #[schemars(title = "Mutations")]
    pub mutation: String,
}

impl Default for LayerColorOptions {
    fn default() -> Self {
        Self {
            clade: "tv_blue".to_owned(),
            subclade: "tv_green".to_owned(),
            mutation: DEFAULT_MUTATION_COLOR.to_owned(),
        }
    }
}
