use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::source::SourceSpec;

/// One discovered regular file: where it lives on disk and the tree-relative
/// name it keeps in the manifest (forward slashes, root prefix applied).
/// Directories never appear as entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub source_path: PathBuf,
    pub dest_rel_path: String,
}

/// Enumerate every regular file reachable from `roots`, in root order, each
/// directory walked pre-order depth-first with children in file-name order.
/// Any root or nested directory whose path equals `exclude` is skipped
/// entirely (typically the destination directory, so a destination nested
/// inside a source does not feed back into itself).
///
/// The full list is built before any copy starts; a single unreadable subtree
/// aborts the whole collection rather than producing a misleading partial
/// result.
pub fn collect(roots: &[SourceSpec], exclude: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for root in roots {
        if same_path(&root.path, exclude) {
            continue;
        }
        let meta = std::fs::metadata(&root.path).map_err(|e| stat_err(&root.path, e))?;
        if meta.is_file() {
            // A file root is a single-entry subtree named by its base name.
            let name = match root.path.file_name() {
                Some(n) => n.to_string_lossy().replace('\\', "/"),
                None => root.path.to_string_lossy().replace('\\', "/"),
            };
            entries.push(FileEntry {
                source_path: root.path.clone(),
                dest_rel_path: prefixed(&root.dest_prefix, &name),
            });
            continue;
        }
        let walker = WalkDir::new(&root.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !same_path(e.path(), exclude));
        for ent in walker {
            let ent = ent.map_err(walk_err)?;
            if !ent.file_type().is_file() {
                continue;
            }
            let rel = pathdiff::diff_paths(ent.path(), &root.path)
                .unwrap_or_else(|| ent.file_name().into());
            let rel = rel.to_string_lossy().replace('\\', "/");
            entries.push(FileEntry {
                source_path: ent.into_path(),
                dest_rel_path: prefixed(&root.dest_prefix, &rel),
            });
        }
    }
    Ok(entries)
}

fn prefixed(prefix: &str, rel: &str) -> String {
    if prefix.is_empty() {
        rel.to_string()
    } else {
        format!("{prefix}/{rel}")
    }
}

/// Lexical path equality, ignoring `./` prefixes, so `./output` excludes
/// `output` regardless of how either side was spelled.
fn same_path(a: &Path, b: &Path) -> bool {
    fn strip(p: &Path) -> impl Iterator<Item = Component<'_>> {
        p.components().filter(|c| !matches!(c, Component::CurDir))
    }
    strip(a).eq(strip(b))
}

fn stat_err(path: &Path, e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::NotFound {
        Error::NotFound { path: path.to_path_buf() }
    } else {
        Error::PermissionDenied { path: path.to_path_buf(), source: e }
    }
}

fn walk_err(e: walkdir::Error) -> Error {
    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
    match e.into_io_error() {
        Some(io) => stat_err(&path, io),
        None => Error::PermissionDenied { path, source: io::Error::other("filesystem loop") },
    }
}
