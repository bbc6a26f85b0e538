//! Primary strategy: isolation forest over the one-dimensional peer sample.
//!
//! The ensemble is fit fresh on every call and discarded afterward. The
//! prediction threshold is the fitted contamination quantile: the score
//! below which (1 − contamination) of the peer sample's own scores fall.
//! The reported score is the raw decision-function value
//! `threshold − score(subject)` — more negative means more anomalous; the
//! binary prediction, not the score, is the decision variable.
//!
//! Uses a seeded LCG (linear congruential generator) for portability and
//! determinism without external dependencies.

use peerscan_core::config::DetectorConfig;

use super::{ModelDecision, OutlierModel, StrategyKind};

/// Euler–Mascheroni constant, used by the average path-length normalizer.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Isolation forest with fixed seed and contamination rate.
#[derive(Debug, Clone)]
pub struct IsolationForest {
    trees: usize,
    subsample: usize,
    contamination: f64,
    seed: u64,
}

impl IsolationForest {
    /// Build a forest from detector configuration.
    pub fn from_config(config: &DetectorConfig) -> Self {
        Self {
            trees: config.forest_trees.max(1),
            subsample: config.forest_subsample.max(2),
            contamination: config.contamination,
            seed: config.seed,
        }
    }

    /// Override the ensemble seed (tests assert determinism through this).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl OutlierModel for IsolationForest {
    fn kind(&self) -> StrategyKind {
        StrategyKind::IsolationForest
    }

    fn evaluate(&self, subject: f64, peers: &[f64]) -> ModelDecision {
        if peers.len() < 2 {
            return ModelDecision::inlier();
        }

        let mut rng = Lcg::new(self.seed);
        let m = self.subsample.min(peers.len());
        let max_depth = (m as f64).log2().ceil().max(1.0) as usize;

        let forest: Vec<IsoTree> = (0..self.trees)
            .map(|_| {
                let sample = sample_without_replacement(peers, m, &mut rng);
                IsoTree::build(&sample, 0, max_depth, &mut rng)
            })
            .collect();

        // Score the training sample to locate the contamination quantile.
        let mut peer_scores: Vec<f64> = peers
            .iter()
            .map(|&v| anomaly_score(&forest, v, m))
            .collect();
        peer_scores.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let threshold = percentile(&peer_scores, (1.0 - self.contamination) * 100.0);

        let subject_score = anomaly_score(&forest, subject, m);
        let decision_function = threshold - subject_score;

        ModelDecision {
            is_outlier: subject_score > threshold,
            score: decision_function,
        }
    }
}

/// One isolation tree: random splits until isolation or the depth cap.
enum IsoTree {
    Leaf {
        size: usize,
    },
    Split {
        value: f64,
        left: Box<IsoTree>,
        right: Box<IsoTree>,
    },
}

impl IsoTree {
    fn build(values: &[f64], depth: usize, max_depth: usize, rng: &mut Lcg) -> Self {
        if depth >= max_depth || values.len() <= 1 {
            return IsoTree::Leaf { size: values.len() };
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        if !(range > 0.0) || !range.is_finite() {
            // All identical values — nothing left to isolate
            return IsoTree::Leaf { size: values.len() };
        }

        let split = min + rng.next_f64() * range;
        let left: Vec<f64> = values.iter().cloned().filter(|&v| v < split).collect();
        let right: Vec<f64> = values.iter().cloned().filter(|&v| v >= split).collect();

        if left.is_empty() || right.is_empty() {
            return IsoTree::Leaf { size: values.len() };
        }

        IsoTree::Split {
            value: split,
            left: Box::new(Self::build(&left, depth + 1, max_depth, rng)),
            right: Box::new(Self::build(&right, depth + 1, max_depth, rng)),
        }
    }

    /// Path length from root to the leaf containing `x`, with the
    /// standard unresolved-subtree adjustment at the leaf.
    fn path_length(&self, x: f64, depth: f64) -> f64 {
        match self {
            IsoTree::Leaf { size } => depth + average_path_length(*size),
            IsoTree::Split { value, left, right } => {
                if x < *value {
                    left.path_length(x, depth + 1.0)
                } else {
                    right.path_length(x, depth + 1.0)
                }
            }
        }
    }
}

/// Anomaly score s(x) = 2^(−E[h(x)] / c(m)), in (0, 1]; higher means
/// more isolated.
fn anomaly_score(forest: &[IsoTree], x: f64, subsample: usize) -> f64 {
    let avg_path = forest
        .iter()
        .map(|tree| tree.path_length(x, 0.0))
        .sum::<f64>()
        / forest.len() as f64;

    let c = average_path_length(subsample);
    if c <= 0.0 {
        return 0.0;
    }
    2f64.powf(-avg_path / c)
}

/// Expected path length c(n) of an unsuccessful BST search — the
/// normalizer from Liu et al.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

/// Compute percentile using linear interpolation over a sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Draw `k` values without replacement via partial Fisher–Yates.
fn sample_without_replacement(values: &[f64], k: usize, rng: &mut Lcg) -> Vec<f64> {
    let mut pool: Vec<f64> = values.to_vec();
    let k = k.min(pool.len());
    for i in 0..k {
        let j = i + rng.next_bounded(pool.len() - i);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool
}

/// Seeded 64-bit LCG, same constants as Knuth's MMIX generator.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next sample in [0, 1).
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Next integer in [0, bound).
    fn next_bounded(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        ((self.next_f64() * bound as f64) as usize).min(bound - 1)
    }
}
