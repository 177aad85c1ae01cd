//! Locating the FASTA file to analyze.

use crate::error::InputError;
use std::path::{Path, PathBuf};

/// Extension of files picked up by directory discovery.
pub const FASTA_EXTENSION: &str = "fasta";

/// Resolves the input FASTA path.
///
/// An explicit `file` must exist. Without one, `search_dir` must contain exactly
/// one `*.fasta` file.
///
/// # Errors
/// * [`InputError::NotFound`] - the explicit file does not exist
/// * [`InputError::NoFastaFound`] - no candidate in `search_dir`
/// * [`InputError::MultipleFastaFound`] - more than one candidate, names sorted
pub fn resolve_input(file: Option<&Path>, search_dir: &Path) -> Result<PathBuf, InputError> {
    if let Some(file) = file {
        if !file.exists() {
            return Err(InputError::NotFound(file.to_path_buf()));
        }
        return Ok(file.to_path_buf());
    }

    let open_error = |source| InputError::Open {
        path: search_dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(search_dir).map_err(open_error)? {
        let path = entry.map_err(open_error)?.path();
        if path.is_file() && has_fasta_extension(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(InputError::NoFastaFound(search_dir.to_path_buf())),
        1 => Ok(candidates.remove(0)),
        _ => Err(InputError::MultipleFastaFound(
            candidates
                .iter()
                .filter_map(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect(),
        )),
    }
}

/// True for `*.fasta` paths; used by the `stats` shorthand as well.
pub fn has_fasta_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == FASTA_EXTENSION)
}
