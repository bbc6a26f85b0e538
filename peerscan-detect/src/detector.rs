//! The detector entry point: Fetch → Detect → Explain → Assemble.

use peerscan_core::config::DetectorConfig;
use peerscan_core::errors::DetectError;
use peerscan_core::traits::MetadataSource;
use peerscan_core::types::{AnomalyResult, DocumentId, TenantId};

use crate::engine::DetectionEngine;
use crate::model::OutlierModel;

/// Per-document anomaly detector over a metadata source.
///
/// One `analyze` call performs exactly one read against the store and no
/// writes; invocations for different documents are independent.
pub struct PeerGroupDetector<S: MetadataSource> {
    source: S,
    engine: DetectionEngine,
}

impl<S: MetadataSource> PeerGroupDetector<S> {
    /// Construct with the best strategy available in this runtime.
    pub fn new(source: S, config: DetectorConfig) -> Self {
        Self {
            source,
            engine: DetectionEngine::new(config),
        }
    }

    /// Construct with an explicitly injected strategy.
    pub fn with_model(source: S, config: DetectorConfig, model: Box<dyn OutlierModel>) -> Self {
        Self {
            source,
            engine: DetectionEngine::with_model(config, model),
        }
    }

    /// Analyze one document against its peer group.
    ///
    /// Returns a complete `AnomalyResult` or a `DetectError` — never a
    /// partial result. A store failure aborts the call immediately; no
    /// retry is attempted here.
    pub fn analyze(
        &self,
        document_id: DocumentId,
        tenant: Option<&TenantId>,
    ) -> Result<AnomalyResult, DetectError> {
        let sample = self
            .source
            .fetch(document_id, tenant, self.engine.config().max_peer_samples)?;
        Ok(self.engine.evaluate(document_id, &sample))
    }

    /// The engine driving this detector.
    pub fn engine(&self) -> &DetectionEngine {
        &self.engine
    }
}
