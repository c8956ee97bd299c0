use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use flatpack_core::collect::collect;
use flatpack_core::flatten::{flatten, FlattenConfig};
use flatpack_core::notify::{Notification, Notify};
use flatpack_core::source::SourceSpec;

#[derive(Parser)]
#[command(
    name = "flatpack",
    version,
    about = "Copy a hierarchical folder tree into a flat folder of numbered files, \
             plus a JSON manifest mapping each flat name back to its original path"
)]
struct Cli {
    /// Flat file base name
    #[arg(short, long, default_value = "file")]
    base: String,
    /// Flat file extension
    #[arg(short, long, default_value = ".bin")]
    extension: String,
    /// Manifest file name
    #[arg(short = 'j', long, default_value = "files.json")]
    json: String,
    /// Destination folder
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,
    /// Report each file as it is copied
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
    /// Report the full plan without touching the filesystem
    #[arg(short = 'n', long, default_value_t = false)]
    dry_run: bool,
    /// Source folders, each `path` or `path:prefix`
    #[arg(default_value = ".")]
    sources: Vec<String>,
}

/// Renders flatten events as one stderr line each.
struct ConsoleNotify;

impl Notify for ConsoleNotify {
    fn notify(&self, event: Notification) {
        match event {
            Notification::PlannedCreateDir { dir } => {
                eprintln!("would create {}", dir.display());
            }
            Notification::PlannedCopy { from, to, public_name } => {
                eprintln!("would copy {} to {} (recorded as {})", from.display(), to.display(), public_name);
            }
            Notification::PerformedCopy { from, to, public_name } => {
                eprintln!("copying {} to {} (recorded as {})", from.display(), to.display(), public_name);
            }
            Notification::PlannedManifestWrite { path, json } => {
                eprintln!("would write {}:\n{}", path.display(), json);
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let roots = cli
        .sources
        .iter()
        .map(|s| SourceSpec::parse(s))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let entries = collect(&roots, &cli.output)?;
    let cfg = FlattenConfig {
        base_name: cli.base,
        extension: cli.extension,
        manifest_file_name: cli.json,
        verbose: cli.verbose,
    };
    flatten(&entries, &cli.output, &cfg, cli.dry_run, &ConsoleNotify)?;
    if !cli.dry_run {
        eprintln!("Flattened {} file(s) into {}", entries.len(), cli.output.display());
    }
    Ok(())
}
