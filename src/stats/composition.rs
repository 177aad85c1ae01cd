/// Dinucleotides in report order.
pub const DINUCLEOTIDES: [&[u8; 2]; 16] = [
    b"CG", b"GC", b"CA", b"CT", b"GA", b"GT", b"AG", b"AC", //
    b"AT", b"TA", b"TC", b"TG", b"TT", b"AA", b"GG", b"CC",
];

fn base_slot(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Mono- and dinucleotide counts of a sequence.
///
/// Only A, C, G and T are counted; any other character is ignored, and a
/// dinucleotide containing one is not counted either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    bases: [usize; 4],
    pairs: [[usize; 4]; 4],
}

impl Composition {
    pub fn from_sequence(seq: &[u8]) -> Self {
        let mut composition = Self::default();

        for slot in seq.iter().filter_map(|&b| base_slot(b)) {
            composition.bases[slot] += 1;
        }

        for window in seq.windows(2) {
            if let (Some(first), Some(second)) = (base_slot(window[0]), base_slot(window[1])) {
                composition.pairs[first][second] += 1;
            }
        }

        composition
    }

    /// Count of a single base (A, C, G or T).
    pub fn count(&self, base: u8) -> usize {
        base_slot(base).map_or(0, |slot| self.bases[slot])
    }

    /// Count of an adjacent base pair such as `b"CG"`.
    pub fn pair_count(&self, pair: &[u8; 2]) -> usize {
        match (base_slot(pair[0]), base_slot(pair[1])) {
            (Some(first), Some(second)) => self.pairs[first][second],
            _ => 0,
        }
    }

    /// Number of unambiguous bases.
    pub fn total(&self) -> usize {
        self.bases.iter().sum()
    }

    /// Fraction of unambiguous bases equal to `base`.
    pub fn fraction(&self, base: u8) -> f64 {
        ratio(self.count(base) as f64, self.total() as f64)
    }

    pub fn gc_content(&self) -> f64 {
        ratio((self.count(b'G') + self.count(b'C')) as f64, self.total() as f64)
    }

    pub fn at_content(&self) -> f64 {
        ratio((self.count(b'A') + self.count(b'T')) as f64, self.total() as f64)
    }

    /// (G - C) / (G + C)
    pub fn gc_skew(&self) -> f64 {
        let (g, c) = (self.count(b'G') as f64, self.count(b'C') as f64);
        ratio(g - c, g + c)
    }

    /// (A - T) / (A + T)
    pub fn at_skew(&self) -> f64 {
        let (a, t) = (self.count(b'A') as f64, self.count(b'T') as f64);
        ratio(a - t, a + t)
    }

    /// Frequency of a dinucleotide relative to the `total - 1` adjacent positions.
    pub fn pair_frequency(&self, pair: &[u8; 2]) -> f64 {
        let positions = self.total().saturating_sub(1);
        ratio(self.pair_count(pair) as f64, positions as f64)
    }

    /// Observed over expected CpG: `CG * N / (C * G)`.
    pub fn cpg_observed_expected(&self) -> f64 {
        let expected = (self.count(b'C') * self.count(b'G')) as f64;
        ratio((self.pair_count(b"CG") * self.total()) as f64, expected)
    }
}
