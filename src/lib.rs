// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints
#![deny(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Hemagglutinin structure annotation engine.
//!
//! Resolves antigenic sites, clade / subclade defining residues and
//! per-sequence mutations into ordered, colored selection layers, applies
//! them to a visualization host and exports one image per viewpoint.
//!
//! # Key entry points
//!
//! - [`catalog::Catalog`] - static strain → clade → subclade residue tables
//! - [`selection`] - residue parsing and query-expression synthesis
//! - [`resolve::Resolver`] - request → ordered [`resolve::AnnotationLayer`]s
//! - [`apply::apply_layers`] - replays layers against a
//!   [`host::VisualizationHost`]
//! - [`pipeline::Annotator`] - full per-sequence passes (reset, scene, layers,
//!   export)
//! - [`options::Options`] - TOML run configuration
//!
//! # Layer order
//!
//! Layers are always applied as antigenic sites → clade → subclade →
//! mutations. Later layers recolor residues shared with earlier ones, so
//! mutation highlights end up on top.

pub mod apply;
pub mod batch;
pub mod catalog;
pub mod error;
pub mod host;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod resolve;
pub mod selection;
pub mod strain;
pub mod view;
