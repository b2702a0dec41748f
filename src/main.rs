//! Command-line front end: writes PyMOL scripts for annotation passes,
//! prints layer plans and lists the catalog.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ha_annotate::{
    batch::BatchManifest,
    catalog::{bare_subclade, Catalog},
    host::PmlScriptHost,
    options::Options,
    pipeline::{Annotator, SequenceJob, SequenceReport},
    resolve::{AnnotationRequest, MutationSet},
    selection::parse_residues,
};

#[derive(Parser)]
#[command(
    name = "ha-annotate",
    version,
    about = "Annotate hemagglutinin structures with antigenic sites, clades \
             and mutations"
)]
struct Cli {
    /// Options file (TOML). Defaults are used when omitted.
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate one sequence and export its images.
    Process {
        #[command(flatten)]
        sequence: SequenceArgs,
        /// PyMOL script to write.
        #[arg(long, default_value = "annotate.pml")]
        script: PathBuf,
    },
    /// Label antigenic sites and mutations only (no clade, no export).
    Label {
        #[command(flatten)]
        sequence: SequenceArgs,
        /// PyMOL script to write.
        #[arg(long, default_value = "label.pml")]
        script: PathBuf,
    },
    /// Annotate every sequence of a TOML manifest.
    Batch {
        /// Manifest file.
        manifest: PathBuf,
        /// PyMOL script to write.
        #[arg(long, default_value = "batch.pml")]
        script: PathBuf,
    },
    /// Resolve layers without a host and print them as JSON.
    Plan {
        #[command(flatten)]
        sequence: SequenceArgs,
    },
    /// List catalogued strains, clades and subclades.
    Catalog,
    /// Print the options JSON schema.
    Schema,
}

#[derive(Args)]
struct SequenceArgs {
    /// Sequence name (names the mutation layer and prefixes file names).
    #[arg(long)]
    name: Option<String>,
    /// Structure file to load.
    #[arg(long, default_value = "4lxv-assembly1.cif")]
    structure: PathBuf,
    /// Strain type (H1N1 or H3N2).
    #[arg(long, default_value = "H1N1")]
    strain: String,
    /// Clade, e.g. 5a.2a.
    #[arg(long, default_value = "")]
    clade: String,
    /// Subclade, e.g. C.1.9.
    #[arg(long)]
    subclade: Option<String>,
    /// HA1 mutations, e.g. 142+189 or 70-75.
    #[arg(long, default_value = "")]
    ha1: String,
    /// HA2 mutations.
    #[arg(long, default_value = "")]
    ha2: String,
    /// Mutation highlight color (defaults to `colors.mutation`).
    #[arg(long)]
    color: Option<String>,
    /// Protein label (defaults to `export.protein`).
    #[arg(long)]
    protein: Option<String>,
}

impl SequenceArgs {
    fn into_job(self, options: &Options) -> Result<SequenceJob> {
        let ha1 = parse_residues(&self.ha1).context("parsing --ha1")?;
        let ha2 = parse_residues(&self.ha2).context("parsing --ha2")?;
        let color = self
            .color
            .unwrap_or_else(|| options.colors.mutation.clone());
        Ok(SequenceJob {
            request: AnnotationRequest {
                sequence_name: self.name,
                strain: self.strain,
                clade: self.clade,
                subclade: self.subclade,
                mutations: MutationSet::new(ha1, ha2).with_color(color),
            },
            structure: self.structure,
            protein: self.protein,
        })
    }
}

fn load_options(path: Option<&Path>) -> Result<Options> {
    match path {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading options {}", path.display())),
        None => Ok(Options::default()),
    }
}

fn summarize(reports: &[SequenceReport]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for report in reports {
        writeln!(
            out,
            "{}: {} layer(s), {} image(s), {} skipped lookup(s)",
            report.sequence_name.as_deref().unwrap_or("<unnamed>"),
            report.layers,
            report.images.len(),
            report.errors.len()
        )?;
        for err in &report.errors {
            writeln!(out, "  - {err}")?;
        }
    }
    Ok(())
}

fn print_catalog() -> Result<()> {
    let mut out = std::io::stdout().lock();
    for entry in Catalog::builtin().strains() {
        writeln!(out, "{}", entry.strain)?;
        let sites: Vec<_> = entry.sites.iter().map(|s| s.name).collect();
        writeln!(out, "  sites: {}", sites.join(", "))?;
        for clade in entry.clades {
            let subs: Vec<_> = clade
                .subclades
                .iter()
                .map(|s| bare_subclade(s.name))
                .collect();
            if subs.is_empty() {
                writeln!(out, "  clade {}", clade.name)?;
            } else {
                writeln!(out, "  clade {}: {}", clade.name, subs.join(", "))?;
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let options = load_options(cli.options.as_deref())?;
    match cli.command {
        Command::Process { sequence, script } => {
            let job = sequence.into_job(&options)?;
            if job.request.clade.is_empty() {
                bail!("--clade is required to annotate and export a sequence");
            }
            let annotator = Annotator::new(options);
            let mut host = PmlScriptHost::new();
            let report = annotator.process_sequence(&mut host, &job)?;
            host.save(&script)
                .with_context(|| format!("writing {}", script.display()))?;
            summarize(&[report])
        }
        Command::Label { sequence, script } => {
            let job = sequence.into_job(&options)?;
            let annotator = Annotator::new(options);
            let mut host = PmlScriptHost::new();
            let report = annotator.label_sequence(&mut host, &job)?;
            host.save(&script)
                .with_context(|| format!("writing {}", script.display()))?;
            summarize(&[report])
        }
        Command::Batch { manifest, script } => {
            let jobs = BatchManifest::load(&manifest)
                .and_then(|m| m.jobs(&options))
                .with_context(|| format!("reading {}", manifest.display()))?;
            if jobs.is_empty() {
                bail!("{} lists no sequences", manifest.display());
            }
            let annotator = Annotator::new(options);
            let mut host = PmlScriptHost::new();
            let reports = annotator.process_batch(&mut host, &jobs)?;
            host.save(&script)
                .with_context(|| format!("writing {}", script.display()))?;
            summarize(&reports)
        }
        Command::Plan { sequence } => {
            let job = sequence.into_job(&options)?;
            let annotator = Annotator::new(options);
            let resolution = annotator.resolver().resolve(&job.request);
            let json = serde_json::to_string_pretty(&resolution)?;
            writeln!(std::io::stdout().lock(), "{json}")?;
            Ok(())
        }
        Command::Catalog => print_catalog(),
        Command::Schema => {
            let json = serde_json::to_string_pretty(&Options::json_schema())?;
            writeln!(std::io::stdout().lock(), "{json}")?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
    run(Cli::parse())
}
