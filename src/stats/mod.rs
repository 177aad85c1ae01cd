//! Sequence statistics: base composition, windowed GC content and codon usage.

pub mod codon_usage;
pub mod composition;
pub mod gc_window;

pub use codon_usage::CodonUsage;
pub use composition::Composition;
pub use gc_window::{GcProfile, WindowConfig};
