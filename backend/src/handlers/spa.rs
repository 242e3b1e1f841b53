use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use std::io::ErrorKind;

use crate::{error::AppError, state::AppState};

/// Fallback for unmatched paths in production mode: serves the prebuilt
/// frontend entry document so the client-side router can take over.
pub async fn spa_fallback(State(state): State<AppState>) -> Result<Response, AppError> {
    let index_path = state.config.frontend_build_dir.join("index.html");
    match tokio::fs::read(&index_path).await {
        Ok(bytes) => Ok(Html(bytes).into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(AppError::NotFound("Frontend entrypoint not found".into()))
        }
        Err(e) => Err(AppError::InternalServerError(e.into())),
    }
}
