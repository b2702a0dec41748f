//! Run configuration with TOML file support.
//!
//! Scene setup, export parameters, layer colors and chain aliases are
//! consolidated here. Options serialize to/from TOML so a lab can keep one
//! file per structure or figure style.

mod chains;
mod colors;
mod export;
mod scene;

use std::path::Path;

pub use chains::ChainOptions;
pub use colors::LayerColorOptions;
pub use export::ExportOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnnotateError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[export]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Base scene setup.
    pub scene: SceneOptions,
    /// Image export parameters.
    pub export: ExportOptions,
    /// Layer colors.
    pub colors: LayerColorOptions,
    /// Chain-group aliases for mutation lists.
    pub chains: ChainOptions,
}

impl Options {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, AnnotateError> {
        let content =
            std::fs::read_to_string(path).map_err(AnnotateError::Io)?;
        toml::from_str(&content)
            .map_err(|e| AnnotateError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), AnnotateError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AnnotateError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AnnotateError::Io)?;
        }
        std::fs::write(path, content).map_err(AnnotateError::Io)
    }
}
