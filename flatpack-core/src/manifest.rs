use serde::{Deserialize, Serialize};

/// One flattened file: the tree-relative name it had in the source and the
/// generated flat name it was copied to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlatRecord {
    pub public_name: String,
    pub local_name: String,
}

/// Written once per run as pretty JSON into the destination directory. Field
/// order is the serialized key order: the record list leads, the generation
/// timestamp follows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub file_map: Vec<FlatRecord>,
    pub date: String,
}

/// Flat filename for the record at `index`. Record `i` in a manifest always
/// carries the name built from `i`; positions are never reused or reordered.
pub fn flat_name(base: &str, index: usize, extension: &str) -> String {
    format!("{base}{index}{extension}")
}

/// Recover the index a flat name was built from, or `None` if the name does
/// not match `base<index>extension`.
pub fn flat_index(name: &str, base: &str, extension: &str) -> Option<usize> {
    let digits = name.strip_prefix(base)?.strip_suffix(extension)?;
    if digits.is_empty() || digits.bytes().any(|b| !b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
