//! Crate-level error types.

use std::fmt;

use crate::host::HostError;

/// Errors produced by the ha-annotate crate.
#[derive(Debug)]
pub enum AnnotateError {
    /// Strain name is not one of the catalogued strain types.
    UnknownStrain(String),
    /// Clade name is not catalogued for the strain.
    UnknownClade {
        /// Strain whose clade table was consulted.
        strain: String,
        /// Requested clade name.
        clade: String,
    },
    /// Subclade is not a child of the requested clade.
    SubcladeMismatch {
        /// Requested parent clade.
        clade: String,
        /// Requested subclade (catalog form, `Subclade_` prefixed).
        subclade: String,
        /// Clade the subclade actually belongs to, if any.
        found_under: Option<String>,
    },
    /// An expression was requested for an empty residue list.
    EmptyInput(String),
    /// Residue text could not be parsed.
    ResidueParse(String),
    /// The visualization host rejected an operation.
    Host(HostError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options or manifest parsing/serialization failure.
    OptionsParse(String),
}

impl AnnotateError {
    /// Whether this error came from a catalog lookup (strain, clade or
    /// subclade). These are recorded during resolution instead of aborting
    /// it.
    #[must_use]
    pub const fn is_catalog_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownStrain(_)
                | Self::UnknownClade { .. }
                | Self::SubcladeMismatch { .. }
        )
    }
}

impl fmt::Display for AnnotateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrain(name) => {
                write!(f, "unknown strain type '{name}' (expected H1N1 or H3N2)")
            }
            Self::UnknownClade { strain, clade } => {
                write!(f, "clade '{clade}' is not catalogued for {strain}")
            }
            Self::SubcladeMismatch {
                clade,
                subclade,
                found_under,
            } => match found_under {
                Some(parent) => write!(
                    f,
                    "{subclade} does not match clade {clade} (it belongs to \
                     clade {parent})"
                ),
                None => write!(f, "{subclade} does not match clade {clade}"),
            },
            Self::EmptyInput(what) => {
                write!(f, "empty residue list for {what}")
            }
            Self::ResidueParse(msg) => write!(f, "residue parse error: {msg}"),
            Self::Host(e) => write!(f, "visualization host error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for AnnotateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Host(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HostError> for AnnotateError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl From<std::io::Error> for AnnotateError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
