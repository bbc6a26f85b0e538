//! v001 — documents table and peer-scan index.
//!
//! `amount` is the extracted numeric attribute under analysis; NULL means
//! extraction produced nothing numeric for this document. The composite
//! index answers the tenant-scoped peer scan without a full table walk.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    doc_type TEXT NOT NULL,
    title TEXT,
    amount REAL,
    created_at INTEGER NOT NULL DEFAULT (unixepoch())
);

CREATE INDEX IF NOT EXISTS idx_documents_type_tenant
    ON documents (doc_type, tenant_id);

CREATE INDEX IF NOT EXISTS idx_documents_type_amount
    ON documents (doc_type) WHERE amount IS NOT NULL;
";
