//! Influenza A strain types covered by the annotation catalog.

use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnnotateError;

/// Strain type selecting a catalog subtree.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum StrainType {
    /// Seasonal H1N1 (pdm09 lineage).
    H1N1,
    /// Seasonal H3N2.
    H3N2,
}

impl StrainType {
    /// Every catalogued strain, in display order.
    pub const ALL: [Self; 2] = [Self::H1N1, Self::H3N2];

    /// Canonical name (`H1N1` / `H3N2`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1N1 => "H1N1",
            Self::H3N2 => "H3N2",
        }
    }
}

impl fmt::Display for StrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrainType {
    type Err = AnnotateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|strain| strain.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AnnotateError::UnknownStrain(trimmed.to_owned()))
    }
}
