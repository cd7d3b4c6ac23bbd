//! Command line interface

use crate::bootstrap::{Decorators, build_container, build_document_service};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use wiring_domain::services::DocumentService;
use wiring_infrastructure::config::ConfigLoader;
use wiring_infrastructure::di::Container;
use wiring_infrastructure::logging::init_logging;
use wiring_infrastructure::utils::measure;

/// Command line interface for wiring
#[derive(Parser, Debug)]
#[command(name = "wiring")]
#[command(about = "Fetch documents through a dependency-injected, decorated document store")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Serve repeated lookups from the document cache
    #[arg(long)]
    pub caching: bool,

    /// Write an audit line for every lookup
    #[arg(long)]
    pub auditing: bool,

    /// Print fetched documents as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Document ids to fetch, in order
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every registered contract and its implementation
    Bindings,
}

impl Cli {
    /// Decorators requested on the command line, on top of the configured ones
    pub fn decorators(&self, configured: Decorators) -> Decorators {
        Decorators {
            caching: configured.caching || self.caching,
            auditing: configured.auditing || self.auditing,
        }
    }
}

/// Run the command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let container = build_container(&config);

    if let Some(Command::Bindings) = cli.command {
        for line in format_bindings(&container) {
            println!("{line}");
        }
        return Ok(());
    }

    let decorators = cli.decorators(Decorators::from_config(&config));
    let service = build_document_service(&container, decorators)
        .context("Failed to assemble the document service")?;

    fetch_all(&service, &cli.ids, cli.json, &mut std::io::stdout()).await
}

/// One `contract => implementation` line per binding, sorted by contract
pub fn format_bindings(container: &Container) -> Vec<String> {
    container
        .registry()
        .describe()
        .into_iter()
        .map(|(contract, implementation)| format!("{contract} => {implementation}"))
        .collect()
}

/// Fetch every id in order, writing one line per document to `out`
///
/// Lines are either `id, title, elapsed` separated by tabs or, with `json`,
/// the serialized document. Logs never go to `out`.
pub async fn fetch_all<W: Write>(
    service: &DocumentService,
    ids: &[String],
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    for id in ids {
        let (result, elapsed) = measure(service.get_document(id)).await;
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        let document = result.with_context(|| format!("Failed to fetch document {id}"))?;

        match document {
            Some(document) if json => writeln!(out, "{}", serde_json::to_string(&document)?)?,
            Some(document) => writeln!(
                out,
                "{}\t{}\t{elapsed_ms:.3} ms",
                document.id, document.title
            )?,
            None => writeln!(out, "{id}\tnot found\t{elapsed_ms:.3} ms")?,
        }
    }
    out.flush()?;
    Ok(())
}
