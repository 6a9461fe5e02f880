//! Resmod CLI - Command-line tool for Wii environment resource files.
//!
//! This is the main entry point for the resmod command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use resmod::export;
use resmod::prelude::*;
use resmod::tree;

/// Resmod - fog, light, and light map file tool
#[derive(Parser)]
#[command(name = "resmod")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported formats
    Formats,

    /// Print the record tree of a file
    Tree {
        /// Input file
        input: PathBuf,

        /// Format id, overriding the file extension
        #[arg(short, long, env = "RESMOD_FORMAT")]
        format: Option<String>,
    },

    /// Decode a file and save it again
    Resave {
        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Format id, overriding the file extension
        #[arg(short, long, env = "RESMOD_FORMAT")]
        format: Option<String>,
    },

    /// Export a file to XML or JSON
    Export {
        /// Input file
        input: PathBuf,

        /// Output XML/JSON file
        output: PathBuf,

        /// Write JSON instead of XML
        #[arg(long)]
        json: bool,

        /// Format id, overriding the file extension
        #[arg(short, long, env = "RESMOD_FORMAT")]
        format: Option<String>,
    },

    /// Build a binary file from an XML or JSON export
    Import {
        /// Input XML file (JSON when the extension is .json)
        input: PathBuf,

        /// Output binary file
        output: PathBuf,

        /// Format id of the resource described by the input
        #[arg(short, long, env = "RESMOD_FORMAT")]
        format: String,
    },

    /// Check that every resource file under a directory re-saves unchanged
    Verify {
        /// Directory to scan
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = Registry::builtin();

    match cli.command {
        Commands::Formats => {
            cmd_formats(&registry);
        }
        Commands::Tree { input, format } => {
            cmd_tree(&registry, &input, format.as_deref())?;
        }
        Commands::Resave { input, output, format } => {
            cmd_resave(&registry, &input, &output, format.as_deref())?;
        }
        Commands::Export { input, output, json, format } => {
            cmd_export(&registry, &input, &output, json, format.as_deref())?;
        }
        Commands::Import { input, output, format } => {
            cmd_import(&registry, &input, &output, &format)?;
        }
        Commands::Verify { dir } => {
            cmd_verify(&registry, &dir)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Pick the format from an explicit id, falling back to the path's extension.
fn resolve_format(registry: &Registry, path: &Path, format: Option<&str>) -> Result<Format> {
    let format = match format {
        Some(id) => registry.by_id(id)?,
        None => registry
            .by_path(path)
            .with_context(|| format!("Cannot tell the format of {}; pass --format", path.display()))?,
    };
    Ok(format)
}

fn load(registry: &Registry, path: &Path, format: Option<&str>) -> Result<Resource> {
    let format = resolve_format(registry, path, format)?;
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let resource = format
        .load(&data)
        .with_context(|| format!("Failed to decode {} as {}", path.display(), format.type_name()))?;
    debug!(path = %path.display(), format = %format, bytes = data.len(), "loaded");
    Ok(resource)
}

fn cmd_formats(registry: &Registry) {
    for entry in registry.entries() {
        println!(
            "{:<10} {:<16} {:<6} .{}",
            entry.id(),
            entry.type_name(),
            entry.format.magic(),
            entry.extensions().join(", .")
        );
    }
}

fn cmd_tree(registry: &Registry, input: &Path, format: Option<&str>) -> Result<()> {
    let resource = load(registry, input, format)?;
    print!("{}", tree::render(&resource));
    println!(
        "\n{} records, declared size {:#X}",
        tree::count_nodes(&resource),
        resource.declared_size()
    );
    Ok(())
}

fn cmd_resave(registry: &Registry, input: &Path, output: &Path, format: Option<&str>) -> Result<()> {
    println!("Resaving: {} -> {}", input.display(), output.display());

    let mut resource = load(registry, input, format)?;
    let data = resource.save().context("Failed to encode resource")?;
    fs::write(output, &data).context("Failed to write output file")?;

    println!("Wrote {} bytes", data.len());
    Ok(())
}

fn cmd_export(
    registry: &Registry,
    input: &Path,
    output: &Path,
    json: bool,
    format: Option<&str>,
) -> Result<()> {
    println!("Exporting: {} -> {}", input.display(), output.display());

    let resource = load(registry, input, format)?;
    let text = if json {
        export::to_json(&resource).context("Failed to convert to JSON")?
    } else {
        export::to_xml(&resource).context("Failed to convert to XML")?
    };
    fs::write(output, text).context("Failed to write output file")?;

    println!("Export complete");
    Ok(())
}

fn cmd_import(registry: &Registry, input: &Path, output: &Path, format: &str) -> Result<()> {
    println!("Importing: {} -> {}", input.display(), output.display());

    let format = registry.by_id(format)?;
    let text = fs::read_to_string(input).context("Failed to read input file")?;
    let is_json = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let mut resource = if is_json {
        export::from_json(format, &text).context("Failed to parse JSON")?
    } else {
        export::from_xml(format, &text).context("Failed to parse XML")?
    };
    let data = resource.save().context("Failed to encode resource")?;
    fs::write(output, &data).context("Failed to write output file")?;

    println!("Wrote {} bytes as {}", data.len(), format.type_name());
    Ok(())
}

/// Outcome of re-saving one file.
enum Verdict {
    Identical,
    Changed { original: usize, saved: usize },
    Failed(String),
}

fn verify_file(format: Format, path: &Path) -> Verdict {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => return Verdict::Failed(e.to_string()),
    };
    let saved = format.load(&data).and_then(|mut resource| resource.save());
    match saved {
        Ok(saved) if saved == data => Verdict::Identical,
        Ok(saved) => Verdict::Changed {
            original: data.len(),
            saved: saved.len(),
        },
        Err(e) => Verdict::Failed(e.to_string()),
    }
}

fn cmd_verify(registry: &Registry, dir: &Path) -> Result<()> {
    println!("Scanning: {}", dir.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.context("Failed to walk directory")?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(format) = registry.by_path(entry.path()) {
            files.push((format, entry.into_path()));
        }
    }

    println!("Verifying {} files...", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let results: Vec<(PathBuf, Verdict)> = files
        .into_par_iter()
        .map(|(format, path)| {
            let verdict = verify_file(format, &path);
            pb.inc(1);
            (path, verdict)
        })
        .collect();
    pb.finish_with_message("Done");

    let mut failures = 0;
    for (path, verdict) in &results {
        match verdict {
            Verdict::Identical => {}
            Verdict::Changed { original, saved } => {
                warn!(path = %path.display(), original, saved, "re-saved bytes differ");
                failures += 1;
            }
            Verdict::Failed(reason) => {
                warn!(path = %path.display(), %reason, "failed to decode or encode");
                failures += 1;
            }
        }
    }

    info!(files = results.len(), failures, elapsed = ?start.elapsed(), "verify finished");
    println!(
        "Verified {} files in {:?} ({} failures)",
        results.len(),
        start.elapsed(),
        failures
    );

    if failures > 0 {
        anyhow::bail!("{} of {} files did not re-save unchanged", failures, results.len());
    }
    Ok(())
}
