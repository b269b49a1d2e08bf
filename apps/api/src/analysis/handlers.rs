use std::io::Write;

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::info;

use crate::analysis::AnalysisReport;
use crate::errors::AppError;
use crate::state::AppState;

/// Fields collected from the upload form.
#[derive(Default)]
struct AnalyzeForm {
    file: Option<Bytes>,
    target_role: Option<String>,
    user_id: Option<String>,
}

/// POST /api/v1/resume/analyze
///
/// Multipart form: `file` (PDF), `target_role`, optional `user_id`.
/// An unreadable PDF still answers 200 with a zeroed report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => form.file = Some(field.bytes().await.map_err(multipart_error)?),
            "target_role" => form.target_role = Some(field.text().await.map_err(multipart_error)?),
            "user_id" => form.user_id = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    let file = form
        .file
        .ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    let target_role = form
        .target_role
        .map(|role| role.trim().to_string())
        .filter(|role| !role.is_empty())
        .ok_or_else(|| AppError::Validation("target_role is required".to_string()))?;

    info!("Analyzing {}-byte upload for role '{target_role}'", file.len());

    let upload = persist_upload(file).await?;
    let report = state
        .analyzer
        .analyze(upload.path(), &target_role, form.user_id.as_deref())
        .await;

    Ok(Json(report))
}

/// Writes the upload to a temp file that is removed when dropped.
async fn persist_upload(bytes: Bytes) -> Result<NamedTempFile, AppError> {
    let written = tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(file)
    })
    .await
    .context("upload writer task failed")?;

    Ok(written.context("failed to write upload to disk")?)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}
