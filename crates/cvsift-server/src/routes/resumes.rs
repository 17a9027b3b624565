//! Resume processing routes — upload, results table, CSV export, clear.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, warn};

use crate::export;
use crate::state::AppState;
use cvsift_core::BatchError;
use cvsift_ingest::SourceDocument;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/resumes", get(list_results).delete(clear_results))
        .route("/resumes/upload", post(upload_resumes))
        .route("/resumes/export", get(export_csv))
}

/// POST /api/resumes/upload — upload resumes (multipart) and process them
/// sequentially, each file fully processed before the next.
async fn upload_resumes(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Json<serde_json::Value> {
    let mut documents = Vec::new();
    // Transport-level failures get the same per-file error treatment as
    // processing failures; the client always learns a file was dropped.
    let mut errors: Vec<BatchError> = Vec::new();

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let filename = match field.file_name() {
                    Some(name) => name.to_string(),
                    None => continue,
                };

                match field.bytes().await {
                    Ok(bytes) => documents.push(SourceDocument {
                        file_name: filename,
                        bytes: bytes.to_vec(),
                    }),
                    Err(e) => {
                        // The stream is unusable after a failed read; no
                        // later field can arrive.
                        warn!("Failed to read multipart field {}: {}", filename, e);
                        errors.push(BatchError {
                            file_name: filename,
                            error: format!("Upload failed: {}", e),
                        });
                        break;
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Multipart stream error: {}", e);
                errors.push(BatchError {
                    file_name: "(upload stream)".to_string(),
                    error: format!("Upload failed: {}", e),
                });
                break;
            }
        }
    }

    // Keep a copy of the raw uploads so a batch can be re-run offline.
    for doc in &documents {
        save_upload(&state, &doc.file_name, &doc.bytes);
    }

    let outcome = state.processor.process_batch(&documents);
    info!(
        "Upload batch: {} processed, {} failed",
        outcome.records.len(),
        errors.len() + outcome.errors.len()
    );

    errors.extend(outcome.errors);
    let processed = outcome.records.clone();
    state.records.write().extend(outcome.records);
    state.errors.write().extend(errors.iter().cloned());

    Json(serde_json::json!({
        "processed": processed,
        "errors": errors,
        "total": processed.len() + errors.len(),
    }))
}

/// GET /api/resumes — the accumulated results table. The `file_name`
/// column is kept off the displayed rows.
async fn list_results(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let records = state.records.read();
    let errors = state.errors.read();

    let rows: Vec<serde_json::Value> = records
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "age": r.age,
                "education": r.education,
                "language": r.language,
            })
        })
        .collect();

    Json(serde_json::json!({
        "rows": rows,
        "total": rows.len(),
        "errors": errors.clone(),
    }))
}

/// GET /api/resumes/export — download the batch as CSV.
async fn export_csv(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let records = state.records.read();

    match export::records_to_csv(&records) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"extracted_data.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// DELETE /api/resumes — clear the accumulated batch.
async fn clear_results(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let mut records = state.records.write();
    let mut errors = state.errors.write();
    let cleared = records.len();
    records.clear();
    errors.clear();

    Json(serde_json::json!({ "cleared": cleared }))
}

/// Persist uploaded bytes under `data/uploads/`, deduplicating filenames
/// with a timestamp suffix.
fn save_upload(state: &AppState, filename: &str, bytes: &[u8]) {
    let safe_filename = sanitize_filename(filename);
    let mut path = state.config.data_paths.uploads.join(&safe_filename);

    if path.exists() {
        let stem = std::path::Path::new(&safe_filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("file");
        let ext = std::path::Path::new(&safe_filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        let ts = chrono::Utc::now().format("%Y%m%d%H%M%S");
        let new_name = if ext.is_empty() {
            format!("{}_{}", stem, ts)
        } else {
            format!("{}_{}.{}", stem, ts, ext)
        };
        path = state.config.data_paths.uploads.join(new_name);
    }

    if let Err(e) = std::fs::write(&path, bytes) {
        warn!("Failed to save upload {}: {}", path.display(), e);
    }
}

fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
