//! Document lookup, peer scan, and ingest queries.
//!
//! Every statement is parameterized; the optional tenant predicate is a
//! second prepared variant, never an interpolated SQL fragment.

use peerscan_core::errors::StorageError;
use peerscan_core::types::{DocumentId, TenantId};
use rusqlite::{params, Connection, OptionalExtension};

/// A document row as ingested into the store.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub tenant_id: String,
    pub doc_type: String,
    pub title: Option<String>,
    /// Extracted numeric attribute; None when extraction found nothing
    /// numeric.
    pub amount: Option<f64>,
}

/// The subject document's fields relevant to one detection call.
#[derive(Debug, Clone)]
pub struct SubjectRow {
    pub doc_type: String,
    pub amount: Option<f64>,
}

/// Insert a document, returning its identifier.
pub fn insert_document(conn: &Connection, doc: &NewDocument) -> Result<DocumentId, StorageError> {
    conn.execute(
        "INSERT INTO documents (tenant_id, doc_type, title, amount)
         VALUES (?1, ?2, ?3, ?4)",
        params![doc.tenant_id, doc.doc_type, doc.title, doc.amount],
    )
    .map_err(StorageError::sqlite)?;
    Ok(DocumentId::new(conn.last_insert_rowid()))
}

/// Point lookup of the subject document's type and numeric attribute.
/// Returns `None` when the document does not exist. A non-numeric value
/// in the attribute column (SQLite columns are dynamically typed) is
/// treated as absent, not as an error.
pub fn subject_row(conn: &Connection, id: DocumentId) -> Result<Option<SubjectRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT doc_type, amount FROM documents WHERE id = ?1")
        .map_err(StorageError::sqlite)?;
    stmt.query_row(params![id.inner()], |row| {
        let amount = match row.get_ref(1)? {
            rusqlite::types::ValueRef::Real(v) => Some(v),
            rusqlite::types::ValueRef::Integer(v) => Some(v as f64),
            _ => None,
        };
        Ok(SubjectRow {
            doc_type: row.get(0)?,
            amount,
        })
    })
    .optional()
    .map_err(StorageError::sqlite)
}

/// Bounded peer scan: numeric attribute values of documents sharing
/// `doc_type`, excluding the subject row, optionally scoped to a tenant.
pub fn peer_amounts(
    conn: &Connection,
    doc_type: &str,
    exclude: DocumentId,
    tenant: Option<&TenantId>,
    limit: usize,
) -> Result<Vec<f64>, StorageError> {
    let sql = if tenant.is_some() {
        "SELECT amount FROM documents
         WHERE doc_type = ?1 AND typeof(amount) IN ('real', 'integer')
           AND id != ?2 AND tenant_id = ?3
         LIMIT ?4"
    } else {
        "SELECT amount FROM documents
         WHERE doc_type = ?1 AND typeof(amount) IN ('real', 'integer')
           AND id != ?2
         LIMIT ?3"
    };

    let mut stmt = conn.prepare_cached(sql).map_err(StorageError::sqlite)?;
    let map_row = |row: &rusqlite::Row<'_>| row.get::<_, f64>(0);
    let rows = if let Some(scope) = tenant {
        stmt.query_map(
            params![doc_type, exclude.inner(), scope.as_str(), limit as i64],
            map_row,
        )
        .map_err(StorageError::sqlite)?
    } else {
        stmt.query_map(params![doc_type, exclude.inner(), limit as i64], map_row)
            .map_err(StorageError::sqlite)?
    };

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(StorageError::sqlite)
}

/// Count all documents (diagnostics and tests).
pub fn count_documents(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))
        .map_err(StorageError::sqlite)
}
