//! I/O module for locating and reading sequence files.

pub mod fasta;
pub mod resolve;

// Re-export main types
pub use fasta::FastaReader;
pub use resolve::resolve_input;
