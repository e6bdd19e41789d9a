use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

use crate::adapters::inbound::http::{
    dto::{ErrorResponseDto, GalleryResponseDto},
    router::AppState,
};

/// Handle gallery listing
pub async fn list_gallery(
    State(app_state): State<AppState>,
) -> Result<Json<GalleryResponseDto>, (StatusCode, Json<ErrorResponseDto>)> {
    let entries = app_state.lister.list().await.map_err(|e| {
        error!(error = %e, "gallery listing failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponseDto::new("Failed to list gallery")),
        )
    })?;

    Ok(Json(GalleryResponseDto::new(entries)))
}
