//! # peerscan-detect
//!
//! The peer-group anomaly detection engine. Given a document's extracted
//! numeric attribute and a peer population, decides whether the value is
//! statistically anomalous.
//!
//! Pipeline: Fetch (via `MetadataSource`) → Detect (`DetectionEngine`) →
//! Explain (`explain`) → Assemble (`assemble`). Every stage after the
//! fetch is a pure function of its inputs; one invocation shares no
//! mutable state with any other.
//!
//! Two strategies, resolved once at construction:
//! - `isolation_forest` (primary, behind the on-by-default
//!   `isolation-forest` feature) — ensemble model fit fresh on the peer
//!   sample each call, fixed contamination and seed
//! - `zscore` (fallback) — deterministic 3-sigma test
//!
//! The two strategies' `score` fields are NOT on a comparable scale; see
//! `AnomalyResult::score`.

pub mod assemble;
pub mod detector;
pub mod engine;
pub mod explain;
pub mod model;
pub mod stats;

pub use detector::PeerGroupDetector;
pub use engine::{DetectionEngine, Evaluation};
pub use model::{ModelDecision, OutlierModel, StrategyKind};
pub use stats::PeerStats;
