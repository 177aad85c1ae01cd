//! Six-frame open reading frame detection.
//!
//! Each strand/frame pair is scanned independently by [`scanner`], reverse-strand
//! spans are reflected onto forward-strand numbering by [`coords`], and
//! [`ranker`] merges, filters and orders the result.

pub mod coords;
pub mod ranker;
pub mod scanner;

pub use ranker::{find_orfs, OrfRanker, RankedOrfs, DEFAULT_DISPLAY_LIMIT, DEFAULT_MIN_ORF_LEN};

use std::fmt;

/// DNA strand a candidate was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    /// The sequence as given ("+").
    Forward,
    /// The reverse complement ("-").
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width specifiers in report tables apply
        f.pad(match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
        })
    }
}

/// One of the six scan contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrandFrame {
    pub strand: Strand,
    /// 0-based codon offset.
    pub frame: usize,
}

impl StrandFrame {
    /// All six contexts in emission order: forward frames 0..=2, then reverse frames 0..=2.
    pub const ALL: [StrandFrame; 6] = [
        StrandFrame { strand: Strand::Forward, frame: 0 },
        StrandFrame { strand: Strand::Forward, frame: 1 },
        StrandFrame { strand: Strand::Forward, frame: 2 },
        StrandFrame { strand: Strand::Reverse, frame: 0 },
        StrandFrame { strand: Strand::Reverse, frame: 1 },
        StrandFrame { strand: Strand::Reverse, frame: 2 },
    ];
}

/// A detected ORF in 1-based, inclusive forward-strand coordinates.
///
/// `start <= end` holds for both strands and `length == end - start + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrfCandidate {
    pub strand: Strand,
    /// 1-based reading frame.
    pub frame: usize,
    pub start: usize,
    pub end: usize,
    pub length: usize,
}
