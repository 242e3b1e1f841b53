use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::AppError,
    models::audit::{AuditResponse, AuditSummary, CreateAuditPayload, CreateAuditResponse},
    repositories::audit as audit_repo,
    state::AppState,
};

/// GET /api/audits
pub async fn list_audits(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuditSummary>>, AppError> {
    let pool = state.pool()?;
    let audits = audit_repo::list_audits(pool).await?;
    Ok(Json(audits))
}

/// GET /api/audits/{id}
pub async fn get_audit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AuditResponse>, AppError> {
    let pool = state.pool()?;
    let audit = audit_repo::fetch_audit(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Audit not found".into()))?;
    Ok(Json(AuditResponse::from(audit)))
}

/// POST /api/audits
///
/// Validation is structural only: both fields present and correctly
/// typed. Malformed bodies (invalid JSON, missing field, wrong type) are
/// turned into 400 responses here instead of axum's default 422.
pub async fn create_audit(
    State(state): State<AppState>,
    payload: Result<Json<CreateAuditPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAuditResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let pool = state.pool()?;
    let CreateAuditPayload {
        audit_name,
        report_data,
    } = payload;
    let report_data = Value::Array(report_data.into_iter().map(Value::Object).collect());

    let audit_id = audit_repo::insert_audit(pool, &audit_name, &report_data)
        .await
        .map_err(|e| AppError::SaveFailed(e.into()))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAuditResponse {
            message: "Audit report saved successfully".to_string(),
            audit_id,
        }),
    ))
}
