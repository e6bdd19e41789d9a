use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::{
    adapters::inbound::http::{
        dto::{ErrorResponseDto, UploadResponseDto},
        router::AppState,
    },
    domain::models::{UploadCandidate, UploadSummary},
};

/// Handle multipart image upload.
///
/// Reads every `images` field from the form, runs the batch through the
/// upload pipeline and reports per-file results. A request carrying no
/// files at all is rejected outright.
pub async fn upload_images(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponseDto>, (StatusCode, Json<ErrorResponseDto>)> {
    let mut candidates = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::new(&format!(
                "Malformed multipart body: {}",
                e
            ))),
        )
    })? {
        if field.name() != Some("images") {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        let data = field.bytes().await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponseDto::new(&format!(
                    "Failed to read field '{}': {}",
                    filename, e
                ))),
            )
        })?;

        candidates.push(UploadCandidate::new(filename, data));
    }

    if candidates.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::new("No files uploaded")),
        ));
    }

    let outcomes = app_state.pipeline.process(candidates).await;
    let summary = UploadSummary::from_outcomes(&outcomes);

    Ok(Json(UploadResponseDto::from(summary)))
}
