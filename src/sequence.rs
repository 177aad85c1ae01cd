//! Shared sequence domain types.
//!
//! Every analysis consumes [`SequenceRecord`]s and classifies codons through the
//! tables defined here.

/// Length of a codon in nucleotides.
pub const CODON_LEN: usize = 3;

/// The only recognized start codon.
pub const START_CODON: &[u8; 3] = b"ATG";

/// Stop codons of the standard genetic code.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Label used for stop codons in the amino-acid table.
pub const STOP_LABEL: &str = "Stop";

const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

// Standard code in TCAG order: index = 16 * first + 4 * second + third.
const AMINO_ACIDS: [&str; 64] = [
    "Phe", "Phe", "Leu", "Leu", "Ser", "Ser", "Ser", "Ser", //
    "Tyr", "Tyr", "Stop", "Stop", "Cys", "Cys", "Stop", "Trp", //
    "Leu", "Leu", "Leu", "Leu", "Pro", "Pro", "Pro", "Pro", //
    "His", "His", "Gln", "Gln", "Arg", "Arg", "Arg", "Arg", //
    "Ile", "Ile", "Ile", "Met", "Thr", "Thr", "Thr", "Thr", //
    "Asn", "Asn", "Lys", "Lys", "Ser", "Ser", "Arg", "Arg", //
    "Val", "Val", "Val", "Val", "Ala", "Ala", "Ala", "Ala", //
    "Asp", "Asp", "Glu", "Glu", "Gly", "Gly", "Gly", "Gly", //
];

/// An identified nucleotide sequence, uppercased on ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// First token of the header line.
    pub id: String,
    /// Remainder of the header line after the name, if any.
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    /// Creates a record without a description, uppercasing the sequence.
    pub fn new(id: impl Into<String>, sequence: impl AsRef<[u8]>) -> Self {
        Self {
            id: id.into(),
            description: None,
            sequence: sequence.as_ref().to_ascii_uppercase(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// The full header line as written after `>`: name, then description.
    pub fn header(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {description}", self.id),
            None => self.id.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Watson-Crick complement of a single base. Anything outside ACGT maps to itself.
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Returns the reverse complement of `seq`.
///
/// The result has the same length as the input; position `i` holds the
/// complement of position `len - 1 - i`. Never fails, even on non-ACGT input.
///
/// # Example
/// ```
/// use seqtools::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement(b"ATGC"), b"GCAT");
/// ```
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

/// True if `base` is one of A, C, G, T.
pub fn is_unambiguous(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T')
}

/// Returns the codon starting at `pos`, or None if it would run past the end.
pub fn codon_at(seq: &[u8], pos: usize) -> Option<&[u8]> {
    seq.get(pos..pos + CODON_LEN)
}

pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == *stop)
}

fn base_index(base: u8) -> Option<usize> {
    BASES.iter().position(|&b| b == base)
}

/// Three-letter amino-acid name for a codon under the standard code.
///
/// Returns None for anything that is not three unambiguous bases.
pub fn amino_acid(codon: &[u8]) -> Option<&'static str> {
    let [a, b, c] = codon else {
        return None;
    };
    let index = base_index(*a)? * 16 + base_index(*b)? * 4 + base_index(*c)?;
    Some(AMINO_ACIDS[index])
}
