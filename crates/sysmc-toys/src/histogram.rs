//! Distribution Reducer: fixed-bin histogram with mode and RMS.
//!
//! The histogram spans the sample range padded by 10% on each side, so no
//! sample lands exactly on a boundary. Bin count is a fixed design constant,
//! not derived from sample size. The reported statistics follow the
//! conventional 1-D histogram summaries: mode = center of the
//! highest-count bin, RMS = binned standard deviation about the
//! histogram's own mean.

use serde::Serialize;

use sysmc_core::{Error, Result};

/// Fixed number of equal-width bins.
pub const BIN_COUNT: usize = 1000;

/// Equal-width histogram of one toy sample; immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    /// Histogram name (e.g. `mc_hist_<dataset>_<variant>`).
    pub name: String,
    /// Number of bins.
    pub n_bins: usize,
    /// Lower edge of the padded range.
    pub lo: f64,
    /// Upper edge of the padded range.
    pub hi: f64,
    /// Bin contents, left to right.
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Build a histogram from a non-empty sample.
    ///
    /// The range is `[min − (max−min)/10, max + (max−min)/10]`. A degenerate
    /// sample (all values equal) falls back to a unit half-width around the
    /// common value so the bins stay well-formed.
    pub fn from_sample(name: impl Into<String>, values: &[f64]) -> Result<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(Error::EmptySample(format!(
                "histogram '{}' cannot be built from zero toys",
                name
            )));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in values {
            min = min.min(x);
            max = max.max(x);
        }

        let (lo, hi) = if max > min {
            let pad = (max - min) / 10.0;
            (min - pad, max + pad)
        } else {
            (min - 1.0, max + 1.0)
        };

        let width = (hi - lo) / BIN_COUNT as f64;
        let mut counts = vec![0_u64; BIN_COUNT];
        for &x in values {
            // Out-of-range values would be dropped; assumed unreachable
            // given the 10% pad.
            if x < lo || x > hi {
                continue;
            }
            let idx = (((x - lo) / width) as usize).min(BIN_COUNT - 1);
            counts[idx] += 1;
        }

        Ok(Self { name, n_bins: BIN_COUNT, lo, hi, counts })
    }

    /// Bin width.
    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.n_bins as f64
    }

    /// Center of bin `i`.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.lo + (i as f64 + 0.5) * self.bin_width()
    }

    /// Total number of entries.
    pub fn n_entries(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Mode estimate: center of the highest-count bin; ties go to the first
    /// (lowest-value) bin in a left-to-right scan.
    pub fn mode(&self) -> f64 {
        let mut best = 0;
        for (i, &c) in self.counts.iter().enumerate() {
            if c > self.counts[best] {
                best = i;
            }
        }
        self.bin_center(best)
    }

    /// Binned mean: bin centers weighted by contents.
    pub fn mean(&self) -> f64 {
        let n = self.n_entries() as f64;
        let sum: f64 =
            self.counts.iter().enumerate().map(|(i, &c)| c as f64 * self.bin_center(i)).sum();
        sum / n
    }

    /// Binned RMS about the histogram's own mean (standard deviation under
    /// the usual histogram convention).
    pub fn rms(&self) -> f64 {
        let n = self.n_entries() as f64;
        let mean = self.mean();
        let sum_sq: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let x = self.bin_center(i);
                c as f64 * x * x
            })
            .sum();
        (sum_sq / n - mean * mean).max(0.0).sqrt()
    }
}
