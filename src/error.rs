//! Typed errors for resolving and reading sequence input.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain sequences from the input source.
///
/// An input that parses but yields no ORFs is not an error.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("no .fasta file found in {}; please specify the file as an argument", .0.display())]
    NoFastaFound(PathBuf),

    #[error("multiple .fasta files found ({}); please specify one", .0.join(", "))]
    MultipleFastaFound(Vec<String>),

    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse FASTA record in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no sequences found in {}", .0.display())]
    NoSequences(PathBuf),
}
