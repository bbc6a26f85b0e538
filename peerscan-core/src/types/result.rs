//! The detection outcome contract returned to callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::identifiers::DocumentId;

/// Result of one anomaly-detection call for a single document.
///
/// Created fresh per invocation and never persisted. The struct is a plain
/// value object: construct it once, read it, drop it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyResult {
    /// The subject document.
    pub document_id: DocumentId,
    /// Boolean verdict.
    pub is_anomaly: bool,
    /// Strategy-dependent score. Under the isolation-forest strategy this
    /// is the raw decision-function output (more negative ⇒ more
    /// anomalous); under the z-score fallback it is the negated z-score
    /// when anomalous, else exactly 0.0. The two scales are NOT
    /// comparable — callers must never compare scores produced by
    /// different strategies.
    pub score: f64,
    /// Human-readable justifications; empty when not anomalous.
    pub reasons: Vec<String>,
    /// Diagnostic key→value pairs (observed amount, peer count, z-score).
    /// Audit/debugging only — never read back by the engine.
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl AnomalyResult {
    /// A non-anomalous result with zero score and no reasons.
    pub fn clean(document_id: DocumentId) -> Self {
        Self {
            document_id,
            is_anomaly: false,
            score: 0.0,
            reasons: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }
}
