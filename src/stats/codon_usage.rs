use crate::sequence::{amino_acid, is_unambiguous, CODON_LEN};
use std::collections::BTreeMap;

/// In-frame codon counts for frame +1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodonUsage {
    counts: BTreeMap<[u8; 3], usize>,
}

/// Codons translating to the same amino acid, most used first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AminoAcidGroup {
    pub amino_acid: &'static str,
    pub codons: Vec<([u8; 3], usize)>,
}

impl CodonUsage {
    /// Counts codons from offset 0, skipping any codon with a non-ACGT base.
    pub fn from_sequence(seq: &[u8]) -> Self {
        let mut counts = BTreeMap::new();

        for chunk in seq.chunks_exact(CODON_LEN) {
            if chunk.iter().all(|&base| is_unambiguous(base)) {
                let codon = [chunk[0], chunk[1], chunk[2]];
                *counts.entry(codon).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, codon: &[u8; 3]) -> usize {
        self.counts.get(codon).copied().unwrap_or(0)
    }

    /// Usage of `codon` per thousand counted codons.
    pub fn per_thousand(&self, codon: &[u8; 3]) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(codon) as f64 / total as f64 * 1000.0,
        }
    }

    /// Groups observed codons by amino acid.
    ///
    /// Groups are ordered by amino-acid name; within a group codons are ordered
    /// by count, most frequent first, ties broken by codon.
    pub fn by_amino_acid(&self) -> Vec<AminoAcidGroup> {
        let mut groups: BTreeMap<&'static str, Vec<([u8; 3], usize)>> = BTreeMap::new();

        for (&codon, &count) in &self.counts {
            if let Some(name) = amino_acid(&codon) {
                groups.entry(name).or_default().push((codon, count));
            }
        }

        groups
            .into_iter()
            .map(|(amino_acid, mut codons)| {
                // stable over codon order from the BTreeMap
                codons.sort_by(|a, b| b.1.cmp(&a.1));
                AminoAcidGroup { amino_acid, codons }
            })
            .collect()
    }
}
