//! Deterministic output identifiers and image paths.
//!
//! `AAID1_H1_5a2a_C19_side.png`: tokens joined with `_`, dots removed from
//! clade and subclade since they are not allowed in exported names. Two
//! different (clade, subclade) pairs that only differ in their dots map to
//! the same name; callers that need both must use distinct sequence names.

use std::path::{Path, PathBuf};

use crate::view::View;

/// Extension appended to every identifier.
pub const IMAGE_EXTENSION: &str = "png";

fn strip_dots(token: &str) -> String {
    token.chars().filter(|&c| c != '.').collect()
}

/// Build the file name for one exported view.
#[must_use]
pub fn build_identifier(
    sequence_name: Option<&str>,
    protein: &str,
    clade: &str,
    subclade: Option<&str>,
    view: View,
) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(5);
    if let Some(name) = sequence_name.filter(|name| !name.is_empty()) {
        tokens.push(name.to_owned());
    }
    tokens.push(protein.to_owned());
    tokens.push(strip_dots(clade));
    if let Some(sub) = subclade.map(str::trim).filter(|sub| !sub.is_empty()) {
        tokens.push(strip_dots(sub));
    }
    tokens.push(view.as_str().to_owned());
    format!("{}.{IMAGE_EXTENSION}", tokens.join("_"))
}

/// `{root}/{protein}/{identifier}`.
#[must_use]
pub fn image_path(root: &Path, protein: &str, identifier: &str) -> PathBuf {
    root.join(protein).join(identifier)
}
