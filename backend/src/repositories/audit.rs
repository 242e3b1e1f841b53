use serde_json::Value;
use sqlx::{types::Json, PgPool};

use crate::models::audit::{Audit, AuditSummary};

/// All audit summaries, newest first. `id DESC` breaks ties between rows
/// inserted within the same timestamp resolution.
pub async fn list_audits(pool: &PgPool) -> Result<Vec<AuditSummary>, sqlx::Error> {
    sqlx::query_as::<_, AuditSummary>(
        "SELECT id, audit_name, created_at FROM audits \
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_audit(pool: &PgPool, id: i32) -> Result<Option<Audit>, sqlx::Error> {
    sqlx::query_as::<_, Audit>(
        "SELECT id, audit_name, created_at, report_data FROM audits WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts a new audit row and returns the server-assigned id. The
/// timestamp comes from the column default, never from the caller.
pub async fn insert_audit(
    pool: &PgPool,
    audit_name: &str,
    report_data: &Value,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO audits (audit_name, report_data) VALUES ($1, $2) RETURNING id",
    )
    .bind(audit_name)
    .bind(Json(report_data))
    .fetch_one(pool)
    .await
}
