//! apidoc — generate API documentation from annotated source comments.
//!
//! Comments tagged with `@package` plus `@endpoint`, `@command` or
//! `@broadcast` become REST, RPC and broadcast entries, grouped by package:
//!
//! - **file mode**: `apidoc -o site server/*.go` writes `index.html`, one page
//!   per package and the stylesheet (or `catalog.json` with `-f json`)
//! - **stdin mode**: `apidoc < server.go` prints the JSON catalog

mod assets;
mod catalog;
mod model;
mod parser;
mod render;
mod scan;

use anyhow::{Context, Result};
use catalog::{Catalog, CatalogBuilder};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "apidoc",
    about = "Generate REST, RPC and broadcast API documentation from annotated source comments"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads one
    /// source file from stdin and prints the JSON catalog.
    inputs: Vec<String>,

    /// Output directory (required when inputs are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: html (default), json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Directory holding style.css, prism.css and prism.js to copy next to
    /// the HTML pages. Without it a built-in style.css is written.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log progress to stderr (same as RUST_LOG=debug)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.inputs.is_empty() {
        return stdin_mode();
    }

    file_mode(&cli)
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// stdin mode: scan one source file from stdin, print the JSON catalog.
fn stdin_mode() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut builder = CatalogBuilder::new();
    for comment in scan::comments(&input) {
        builder.add_comment(&comment);
    }
    print!("{}", render::json::to_json(&builder.finish())?);
    Ok(())
}

/// file mode: scan every input, then write the rendered site.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when inputs are given")?;

    // Prism is only available when copied from --assets
    let renderer = render::create_renderer(&cli.format, cli.assets.is_some())?;
    if let (true, Some(dir)) = (renderer.needs_assets(), cli.assets.as_deref()) {
        assets::verify(dir)?;
    }
    let input_files = scan::expand_inputs(&cli.inputs)?;

    // Read and aggregate everything before the first write
    let catalog = build_catalog(&input_files)?;
    if catalog.is_empty() {
        warn!("no annotated documentation found");
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    for page in renderer.render(&catalog)? {
        let out_path = output_dir.join(&page.path);
        fs::write(&out_path, &page.contents)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        debug!("wrote {}", out_path.display());
    }

    if renderer.needs_assets() {
        assets::install(cli.assets.as_deref(), output_dir)?;
    }

    info!(
        packages = catalog.package_names().len(),
        files = input_files.len(),
        "documentation written to {}",
        output_dir.display()
    );
    Ok(())
}

fn build_catalog(paths: &[PathBuf]) -> Result<Catalog> {
    let mut builder = CatalogBuilder::new();
    for path in paths {
        let documents = scan_file(&mut builder, path)?;
        debug!(documents, "scanned {}", path.display());
    }
    Ok(builder.finish())
}

/// Feed every comment of one file to the builder; returns how many were
/// documentation.
fn scan_file(builder: &mut CatalogBuilder, path: &Path) -> Result<usize> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut documents = 0;
    for comment in scan::comments(&content) {
        if builder.add_comment(&comment) {
            documents += 1;
        }
    }
    Ok(documents)
}
