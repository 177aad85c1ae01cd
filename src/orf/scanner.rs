//! Start-to-stop scanning of a single strand in a single frame.

use crate::sequence::{codon_at, is_start_codon, is_stop_codon, CODON_LEN};

/// A strand-relative ORF: 0-based, half-open `[start, end)` on the scanned sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSpan {
    /// Offset of the start codon.
    pub start: usize,
    /// One past the last base of the stop codon.
    pub end: usize,
}

impl RawSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the first in-frame stop codon at or after `from`.
fn find_stop(seq: &[u8], from: usize) -> Option<usize> {
    (from..seq.len())
        .step_by(CODON_LEN)
        .take_while(|&pos| pos + CODON_LEN <= seq.len())
        .find(|&pos| codon_at(seq, pos).is_some_and(is_stop_codon))
}

/// Scans `seq` in `frame` (0, 1 or 2) for ATG-to-stop spans of at least `min_len` bases.
///
/// The walk is greedy and non-overlapping: once a start codon reaches its first
/// in-frame stop, the walk resumes past that stop without revisiting any start
/// codons in between. The stop is consumed whether or not the span was long
/// enough to be kept. A start codon with no downstream stop ends the scan of
/// this frame.
///
/// Nested starts inside an ORF are therefore never reported on their own.
pub fn scan_frame(seq: &[u8], frame: usize, min_len: usize) -> Vec<RawSpan> {
    let mut spans = Vec::new();
    let mut pos = frame;

    while let Some(codon) = codon_at(seq, pos) {
        if is_start_codon(codon) {
            let Some(stop) = find_stop(seq, pos) else {
                break;
            };
            let span = RawSpan {
                start: pos,
                end: stop + CODON_LEN,
            };
            if span.len() >= min_len {
                spans.push(span);
            }
            pos = span.end;
        }
        pos += CODON_LEN;
    }

    spans
}
