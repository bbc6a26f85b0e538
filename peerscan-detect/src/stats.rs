//! Peer-sample summary statistics.

use statrs::statistics::Statistics;

/// Mean, sample standard deviation, and count of one peer sample.
///
/// Computed once per detection call and shared by the fallback strategy
/// and the reason explainer, so both see the same population.
#[derive(Debug, Clone, Copy)]
pub struct PeerStats {
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

impl PeerStats {
    /// Compute statistics from a slice of values.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                count: 0,
            };
        }

        let mean = values.mean();
        let std_dev = if values.len() > 1 {
            let sd = values.std_dev();
            if sd.is_finite() {
                sd
            } else {
                0.0
            }
        } else {
            0.0
        };

        Self {
            mean,
            std_dev,
            count: values.len(),
        }
    }

    /// The subject's z-score against this sample. Zero when the sample
    /// has no variance (avoids division by zero).
    pub fn z_score(&self, subject: f64) -> f64 {
        if self.std_dev > 0.0 {
            (subject - self.mean) / self.std_dev
        } else {
            0.0
        }
    }
}
