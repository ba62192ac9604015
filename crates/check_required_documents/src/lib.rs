// crates/check_required_documents/src/lib.rs

use std::path::Path;

/// Checks which of the given filenames are missing from `dir`.
///
/// Returns the missing names in the same order they were given, so the
/// caller can report an itemized list. An empty result means every
/// required document is present and extraction may begin.
pub fn check_required_documents<P: AsRef<Path>>(dir: P, names: &[&str]) -> Vec<String> {
    let dir = dir.as_ref();
    names
        .iter()
        .filter(|&&name| !dir.join(name).exists())
        .map(|&name| name.to_string())
        .collect()
}
