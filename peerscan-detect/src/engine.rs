//! The Outlier Engine — a state machine over two detection strategies.
//!
//! Transition order per call:
//! 1. subject absent            → `InsufficientSubject` (terminal)
//! 2. peers below the minimum   → `InsufficientPeers` (terminal)
//! 3. resolved model evaluates  → `Scored` (terminal)
//!
//! The model is resolved once at construction; a single invocation owns
//! all of its state, so concurrent invocations are independent.

use peerscan_core::config::DetectorConfig;
use peerscan_core::types::{AnomalyResult, DocumentId, MetadataSample};

use crate::assemble;
use crate::explain;
use crate::model::{self, ModelDecision, OutlierModel, StrategyKind};
use crate::stats::PeerStats;

/// Terminal state of one engine run.
#[derive(Debug, Clone)]
pub enum Evaluation {
    /// The subject's numeric attribute was absent or non-numeric.
    InsufficientSubject,
    /// The peer sample was too small for reliable statistics.
    InsufficientPeers { subject: f64, peer_count: usize },
    /// A strategy ran to completion.
    Scored {
        strategy: StrategyKind,
        subject: f64,
        decision: ModelDecision,
        stats: PeerStats,
        /// Subject z-score against the same peer sample the model saw.
        z: f64,
    },
}

/// Runs the detection state machine with an injected strategy.
pub struct DetectionEngine {
    config: DetectorConfig,
    model: Box<dyn OutlierModel>,
}

impl DetectionEngine {
    /// Construct with the best model available in this runtime.
    pub fn new(config: DetectorConfig) -> Self {
        let model = model::resolve_model(&config);
        Self { config, model }
    }

    /// Construct with an explicitly injected model (tests, forced fallback).
    pub fn with_model(config: DetectorConfig, model: Box<dyn OutlierModel>) -> Self {
        Self { config, model }
    }

    /// The strategy this engine will apply.
    pub fn strategy(&self) -> StrategyKind {
        self.model.kind()
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run Detect → Explain → Assemble on an already-fetched sample.
    pub fn evaluate(&self, document_id: DocumentId, sample: &MetadataSample) -> AnomalyResult {
        let evaluation = self.run(sample);
        let reasons = explain::reasons(&evaluation, self.config.z_threshold);
        let result = assemble::build(document_id, &evaluation, reasons);

        tracing::debug!(
            document_id = document_id.inner(),
            is_anomaly = result.is_anomaly,
            score = result.score,
            strategy = %self.model.kind(),
            "evaluated document"
        );

        result
    }

    fn run(&self, sample: &MetadataSample) -> Evaluation {
        let subject = match sample.subject {
            None => return Evaluation::InsufficientSubject,
            Some(value) => value,
        };

        if sample.peers.len() < self.config.min_peer_samples {
            return Evaluation::InsufficientPeers {
                subject,
                peer_count: sample.peers.len(),
            };
        }

        // One statistics pass over the exact sample the model is fit on,
        // so the explainer and the fallback agree on the population.
        let stats = PeerStats::from_values(&sample.peers);
        let z = stats.z_score(subject);
        let decision = self.model.evaluate(subject, &sample.peers);

        Evaluation::Scored {
            strategy: self.model.kind(),
            subject,
            decision,
            stats,
            z,
        }
    }
}
