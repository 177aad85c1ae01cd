//! Mapping of strand-relative spans onto 1-based forward-strand coordinates.

use super::scanner::RawSpan;
use super::{OrfCandidate, Strand, StrandFrame};

/// Converts a scanned span to an [`OrfCandidate`].
///
/// `seq_len` is the length of the forward sequence, which equals the length of
/// its reverse complement. A reverse-strand position `p` (1-based) corresponds
/// to forward position `seq_len - p + 1`, so the span's ends swap roles.
pub fn to_forward(span: RawSpan, context: StrandFrame, seq_len: usize) -> OrfCandidate {
    let (start, end) = match context.strand {
        Strand::Forward => (span.start + 1, span.end),
        Strand::Reverse => (reflect(span.end, seq_len), reflect(span.start + 1, seq_len)),
    };

    OrfCandidate {
        strand: context.strand,
        frame: context.frame + 1,
        start,
        end,
        length: span.len(),
    }
}

/// Maps a 1-based position on the reverse complement to the forward strand.
///
/// Applying it twice returns the original position.
pub fn reflect(position: usize, seq_len: usize) -> usize {
    seq_len - position + 1
}
