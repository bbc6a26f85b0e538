//! The Metadata Fetcher — `MetadataSource` over SQLite.

use std::sync::Arc;

use peerscan_core::errors::StorageError;
use peerscan_core::traits::MetadataSource;
use peerscan_core::types::{DocumentId, MetadataSample, TenantId};

use crate::connection::DatabaseManager;
use crate::queries::documents;

/// Fetches the subject's numeric attribute and its peer population from
/// the document store. Read-only; every call samples fresh.
pub struct SqliteMetadataSource {
    db: Arc<DatabaseManager>,
}

impl SqliteMetadataSource {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }
}

impl MetadataSource for SqliteMetadataSource {
    fn fetch(
        &self,
        document_id: DocumentId,
        tenant: Option<&TenantId>,
        max_peers: usize,
    ) -> Result<MetadataSample, StorageError> {
        self.db.with_reader(|conn| {
            let subject = match documents::subject_row(conn, document_id)? {
                // A missing row leaves nothing to compare against.
                None => return Ok(MetadataSample::default()),
                Some(row) => row,
            };

            // Peers share the subject's logical type; the subject row is
            // excluded so it never skews its own baseline.
            let peers = documents::peer_amounts(
                conn,
                &subject.doc_type,
                document_id,
                tenant,
                max_peers,
            )?;

            tracing::debug!(
                document_id = document_id.inner(),
                peer_count = peers.len(),
                has_amount = subject.amount.is_some(),
                "fetched metadata sample"
            );

            Ok(MetadataSample::new(subject.amount, peers))
        })
    }
}
