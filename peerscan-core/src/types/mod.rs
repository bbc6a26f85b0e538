//! Core value objects for peer-group anomaly detection.

pub mod identifiers;
pub mod result;
pub mod sample;

pub use identifiers::{DocumentId, TenantId};
pub use result::AnomalyResult;
pub use sample::MetadataSample;
