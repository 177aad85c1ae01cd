//! Nucleotide sequence analysis: six-frame ORF detection, base composition,
//! windowed GC content and codon usage over FASTA input.

pub mod cli;
pub mod error;
pub mod io;
pub mod orf;
pub mod report;
pub mod sequence;
pub mod stats;
