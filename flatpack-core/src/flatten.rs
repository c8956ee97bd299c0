use std::fs;
use std::path::Path;

use crate::collect::FileEntry;
use crate::error::{Error, Result};
use crate::manifest::{flat_name, FlatRecord, Manifest};
use crate::notify::{Notification, Notify};

/// Naming and reporting knobs for one flatten run.
#[derive(Clone, Debug)]
pub struct FlattenConfig {
    pub base_name: String,
    pub extension: String,
    pub manifest_file_name: String,
    pub verbose: bool,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            base_name: "file".to_string(),
            extension: ".bin".to_string(),
            manifest_file_name: "files.json".to_string(),
            verbose: false,
        }
    }
}

/// Copy `entries` into `dest_dir` under generated flat names and write the
/// manifest mapping flat names back to original paths. Record `i` always
/// names the `i`-th entry received. Existing files of the same generated name
/// are overwritten.
///
/// With `dry_run` set nothing on the filesystem is touched; the directory
/// creation, every copy, and the manifest write (including the exact JSON a
/// real run would produce) are reported through `sink` instead. A copy
/// failure aborts the loop and leaves the files already copied in place.
pub fn flatten(
    entries: &[FileEntry],
    dest_dir: &Path,
    cfg: &FlattenConfig,
    dry_run: bool,
    sink: &dyn Notify,
) -> Result<Manifest> {
    if dry_run {
        sink.notify(Notification::PlannedCreateDir { dir: dest_dir.to_path_buf() });
    } else {
        fs::create_dir_all(dest_dir)
            .map_err(|e| Error::WriteFailed { path: dest_dir.to_path_buf(), source: e })?;
    }

    let mut file_map = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let local_name = flat_name(&cfg.base_name, index, &cfg.extension);
        let dest = dest_dir.join(&local_name);
        if dry_run {
            sink.notify(Notification::PlannedCopy {
                from: entry.source_path.clone(),
                to: dest.clone(),
                public_name: entry.dest_rel_path.clone(),
            });
        } else {
            if cfg.verbose {
                sink.notify(Notification::PerformedCopy {
                    from: entry.source_path.clone(),
                    to: dest.clone(),
                    public_name: entry.dest_rel_path.clone(),
                });
            }
            fs::copy(&entry.source_path, &dest).map_err(|e| Error::CopyFailed {
                from: entry.source_path.clone(),
                to: dest.clone(),
                source: e,
            })?;
        }
        file_map.push(FlatRecord { public_name: entry.dest_rel_path.clone(), local_name });
    }

    // One timestamp per run, taken at manifest-build time.
    let date = chrono::Local::now().format("%a %b %d %Y %H:%M:%S %z").to_string();
    let manifest = Manifest { file_map, date };

    let manifest_path = dest_dir.join(&cfg.manifest_file_name);
    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| Error::WriteFailed { path: manifest_path.clone(), source: e.into() })?;
    if dry_run {
        sink.notify(Notification::PlannedManifestWrite { path: manifest_path, json });
    } else {
        fs::write(&manifest_path, json)
            .map_err(|e| Error::WriteFailed { path: manifest_path.clone(), source: e })?;
    }

    Ok(manifest)
}
