use anyhow::{bail, Result};

/// Default window size in bp.
pub const DEFAULT_WINDOW: usize = 100;
/// Default step between window starts in bp.
pub const DEFAULT_STEP: usize = 10;

/// Sliding window parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub window: usize,
    pub step: usize,
}

impl WindowConfig {
    /// Creates a validated window configuration.
    ///
    /// # Arguments
    /// * `window` - Window size in bp (default: 100)
    /// * `step` - Step size in bp (default: 10)
    ///
    /// # Errors
    /// Returns an error if either value is zero.
    pub fn new(window: Option<usize>, step: Option<usize>) -> Result<Self> {
        let window = window.unwrap_or(DEFAULT_WINDOW);
        let step = step.unwrap_or(DEFAULT_STEP);

        if window == 0 {
            bail!("Window size must be greater than zero");
        }
        if step == 0 {
            bail!("Step size must be greater than zero");
        }

        Ok(Self { window, step })
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            step: DEFAULT_STEP,
        }
    }
}

/// GC content of one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GcWindow {
    /// 0-based position of the window centre.
    pub center: usize,
    pub gc_percent: f64,
}

fn gc_count(seq: &[u8]) -> usize {
    seq.iter().filter(|&&b| b == b'G' || b == b'C').count()
}

/// Computes GC percentage over windows starting at 0 and advancing by `step`.
///
/// Only full windows are reported; the percentage is relative to the window
/// size, so ambiguous bases count as non-GC.
pub fn sliding_gc(seq: &[u8], config: WindowConfig) -> Vec<GcWindow> {
    if seq.len() < config.window {
        return Vec::new();
    }

    (0..=seq.len() - config.window)
        .step_by(config.step)
        .map(|start| {
            let chunk = &seq[start..start + config.window];
            GcWindow {
                center: start + config.window / 2,
                gc_percent: gc_count(chunk) as f64 / config.window as f64 * 100.0,
            }
        })
        .collect()
}

/// Windowed GC profile of one sequence with summary values.
#[derive(Debug, Clone, PartialEq)]
pub struct GcProfile {
    pub windows: Vec<GcWindow>,
    /// GC percentage over the whole sequence.
    pub overall: f64,
    pub min: f64,
    pub max: f64,
}

impl GcProfile {
    /// Returns None when the sequence is shorter than one window.
    pub fn compute(seq: &[u8], config: WindowConfig) -> Option<Self> {
        let windows = sliding_gc(seq, config);
        if windows.is_empty() {
            return None;
        }

        let overall = gc_count(seq) as f64 / seq.len() as f64 * 100.0;
        let (min, max) = windows
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
                (lo.min(w.gc_percent), hi.max(w.gc_percent))
            });

        Some(Self {
            windows,
            overall,
            min,
            max,
        })
    }
}
