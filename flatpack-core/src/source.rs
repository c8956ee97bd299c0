use std::path::PathBuf;

use crate::error::{Error, Result};

/// One traversal root: a filesystem path plus the destination sub-path its
/// files are recorded under in the manifest. Parsed once from the CLI's
/// `path` / `path:prefix` syntax, immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSpec {
    pub path: PathBuf,
    pub dest_prefix: String,
}

impl SourceSpec {
    /// A root with no destination prefix.
    pub fn bare(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), dest_prefix: String::new() }
    }

    /// Parse `path` or `path:prefix`. An empty path or an empty prefix after
    /// the delimiter is rejected; surrounding slashes on the prefix are
    /// dropped so it joins cleanly under the destination namespace.
    pub fn parse(spec: &str) -> Result<Self> {
        match spec.split_once(':') {
            None if spec.is_empty() => {
                Err(Error::InvalidConfig("empty source spec".to_string()))
            }
            None => Ok(Self::bare(spec)),
            Some((path, prefix)) => {
                if path.is_empty() || prefix.is_empty() {
                    return Err(Error::InvalidConfig(format!(
                        "{spec:?}: expected `path` or `path:prefix`"
                    )));
                }
                Ok(Self {
                    path: PathBuf::from(path),
                    dest_prefix: prefix.trim_matches('/').to_string(),
                })
            }
        }
    }
}
