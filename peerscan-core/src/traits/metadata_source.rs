//! The read-only seam between detection and the document store.

use crate::errors::StorageError;
use crate::types::{DocumentId, MetadataSample, TenantId};

/// Loads the subject document's numeric attribute and its peer population.
///
/// The only I/O in a detection call happens behind this trait. Both query
/// shapes are read-only; a connectivity failure propagates as
/// `StorageError` and aborts the call.
pub trait MetadataSource: Send + Sync {
    /// Fetch the subject's attribute value and up to `max_peers` peer
    /// values of the same logical document type, optionally scoped to one
    /// tenant. The subject document is never part of its own peer sample.
    fn fetch(
        &self,
        document_id: DocumentId,
        tenant: Option<&TenantId>,
        max_peers: usize,
    ) -> Result<MetadataSample, StorageError>;
}
