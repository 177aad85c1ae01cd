//! Six-frame aggregation, filtering and ordering of ORF candidates.

use super::coords::to_forward;
use super::scanner::scan_frame;
use super::{OrfCandidate, Strand, StrandFrame};
use crate::sequence::reverse_complement;

/// Default minimum ORF length in nucleotides.
pub const DEFAULT_MIN_ORF_LEN: usize = 100;

/// Default number of ORFs shown per sequence.
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// Ranked ORFs for one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedOrfs {
    /// Candidates kept after truncation, longest first.
    pub orfs: Vec<OrfCandidate>,
    /// Number of candidates found before truncation.
    pub total: usize,
}

impl RankedOrfs {
    /// Candidates dropped by the display limit.
    pub fn hidden(&self) -> usize {
        self.total - self.orfs.len()
    }

    pub fn longest(&self) -> Option<&OrfCandidate> {
        self.orfs.first()
    }
}

/// Configuration for finding and ranking ORFs across all six frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrfRanker {
    /// Minimum ORF length in nucleotides, stop codon included.
    pub min_len: usize,
    /// Maximum number of candidates to keep; `None` keeps all.
    pub limit: Option<usize>,
}

impl Default for OrfRanker {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_ORF_LEN,
            limit: Some(DEFAULT_DISPLAY_LIMIT),
        }
    }
}

impl OrfRanker {
    /// Creates a ranker with the given minimum length and display limit.
    ///
    /// # Arguments
    /// * `min_len` - Minimum ORF length (default: 100)
    /// * `limit` - Maximum number of ORFs to keep; `None` keeps every ORF
    pub fn new(min_len: Option<usize>, limit: Option<usize>) -> Self {
        Self {
            min_len: min_len.unwrap_or(DEFAULT_MIN_ORF_LEN),
            limit,
        }
    }

    /// Finds and ranks the ORFs of `seq`, applying the display limit.
    pub fn rank(&self, seq: &[u8]) -> RankedOrfs {
        let mut orfs = find_orfs(seq, self.min_len);
        let total = orfs.len();
        if let Some(limit) = self.limit {
            orfs.truncate(limit);
        }
        RankedOrfs { orfs, total }
    }
}

/// Finds ORFs of at least `min_len` nucleotides in all six frames of `seq`.
///
/// Coordinates are 1-based and inclusive on the forward strand for both
/// strands. The result is sorted by length, longest first; equal lengths keep
/// scan order (forward frames 1 to 3, then reverse frames 1 to 3, each left to
/// right along the scanned strand).
///
/// # Example
/// ```
/// use seqtools::orf::{find_orfs, Strand};
///
/// let orfs = find_orfs(b"ATGAAATAA", 1);
/// assert_eq!(orfs.len(), 1);
/// assert_eq!((orfs[0].start, orfs[0].end, orfs[0].length), (1, 9, 9));
/// assert_eq!(orfs[0].strand, Strand::Forward);
/// ```
pub fn find_orfs(seq: &[u8], min_len: usize) -> Vec<OrfCandidate> {
    let reverse = reverse_complement(seq);

    let mut orfs: Vec<OrfCandidate> = StrandFrame::ALL
        .iter()
        .flat_map(|&context| {
            let strand_seq = match context.strand {
                Strand::Forward => seq,
                Strand::Reverse => reverse.as_slice(),
            };
            scan_frame(strand_seq, context.frame, min_len)
                .into_iter()
                .map(move |span| to_forward(span, context, seq.len()))
        })
        .collect();

    // stable: ties keep emission order
    orfs.sort_by(|a, b| b.length.cmp(&a.length));
    orfs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_forward_orf() {
        let orfs = find_orfs(b"ATGAAATAA", 1);
        assert_eq!(
            orfs,
            vec![OrfCandidate {
                strand: Strand::Forward,
                frame: 1,
                start: 1,
                end: 9,
                length: 9,
            }]
        );
    }

    #[test]
    fn test_open_orf_not_reported() {
        assert!(find_orfs(b"ATGAAA", 1).is_empty());
    }

    #[test]
    fn test_offset_forward_orf() {
        let orfs = find_orfs(b"AAATTAATGCCCTAAGGG", 3);
        assert_eq!(
            orfs,
            vec![OrfCandidate {
                strand: Strand::Forward,
                frame: 1,
                start: 7,
                end: 15,
                length: 9,
            }]
        );
    }

    #[test]
    fn test_reverse_strand_orf() {
        // reverse complement is ATGCCCTAA
        let orfs = find_orfs(b"TTAGGGCAT", 1);
        assert_eq!(
            orfs,
            vec![OrfCandidate {
                strand: Strand::Reverse,
                frame: 1,
                start: 1,
                end: 9,
                length: 9,
            }]
        );
    }

    #[test]
    fn test_equal_lengths_keep_emission_order() {
        // Palindromic under reverse complement: one ORF on each strand.
        let orfs = find_orfs(b"ATGCCCTAATTAGGGCAT", 1);
        assert_eq!(orfs.len(), 2);
        assert_eq!(orfs[0].strand, Strand::Forward);
        assert_eq!((orfs[0].start, orfs[0].end), (1, 9));
        assert_eq!(orfs[1].strand, Strand::Reverse);
        assert_eq!((orfs[1].start, orfs[1].end), (10, 18));
    }

    #[test]
    fn test_sorted_by_length_descending() {
        // frame 1: 9 nt ORF; frame 2: 15 nt ORF
        let seq = b"ATGAAATAAC\
                    ATGCCCGGGTTTTAGC";
        let orfs = find_orfs(seq, 1);
        let lengths: Vec<usize> = orfs.iter().map(|o| o.length).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
        assert_eq!(orfs[0].length, 15);
        assert_eq!((orfs[0].start, orfs[0].frame), (11, 2));
    }

    #[test]
    fn test_min_len_filter() {
        assert!(find_orfs(b"ATGAAATAA", 10).is_empty());
        assert_eq!(find_orfs(b"ATGAAATAA", 9).len(), 1);
    }

    #[test]
    fn test_default_min_len() {
        let ranker = OrfRanker::default();
        assert_eq!(ranker.min_len, DEFAULT_MIN_ORF_LEN);
        assert!(ranker.rank(b"ATGAAATAA").orfs.is_empty());

        let mut seq = b"ATG".to_vec();
        seq.extend(b"GCC".repeat(32));
        seq.extend(b"TAA");
        let ranked = ranker.rank(&seq);
        assert_eq!(ranked.total, 1);
        assert_eq!(ranked.orfs[0].length, 102);
    }

    #[test]
    fn test_empty_and_short_sequences() {
        for min_len in [0, 1, 100] {
            assert!(find_orfs(b"", min_len).is_empty());
            assert!(find_orfs(b"A", min_len).is_empty());
            assert!(find_orfs(b"AT", min_len).is_empty());
        }
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        // Five 9 nt ORFs in frame 1, separated by spacer codons.
        let seq = b"ATGAAATAAGGG".repeat(5);
        let ranker = OrfRanker::new(Some(1), Some(2));
        let ranked = ranker.rank(&seq);
        assert_eq!(ranked.total, 5);
        assert_eq!(ranked.orfs.len(), 2);
        assert_eq!(ranked.hidden(), 3);
        assert_eq!(ranked.longest().map(|o| o.start), Some(1));

        let unlimited = OrfRanker::new(Some(1), None).rank(&seq);
        assert_eq!(unlimited.orfs.len(), 5);
        assert_eq!(unlimited.hidden(), 0);
    }
}
