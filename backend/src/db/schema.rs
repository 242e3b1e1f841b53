use sqlx::PgPool;

/// Idempotent table creation, run once at startup before the server
/// accepts traffic. Existing rows are never touched.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS audits (\
            id SERIAL PRIMARY KEY, \
            audit_name VARCHAR(255) NOT NULL, \
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP, \
            report_data JSONB NOT NULL\
         )",
    )
    .execute(pool)
    .await
    .map(|_| ())
}
