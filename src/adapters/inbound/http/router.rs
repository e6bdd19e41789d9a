use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{list_gallery, upload_images};
use crate::{
    app::GalleryServices,
    services::{GalleryLister, UploadPipeline},
};

/// Total request body cap for multipart uploads
pub const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<UploadPipeline>,
    pub lister: Arc<GalleryLister>,
}

impl AppState {
    pub fn new(services: GalleryServices) -> Self {
        Self {
            pipeline: Arc::new(services.pipeline),
            lister: Arc::new(services.lister),
        }
    }
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/gallery", get(list_gallery))
        .route("/upload", post(upload_images))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::create_in_memory_app;
    use axum_test::TestServer;

    async fn create_test_app_state() -> AppState {
        let services = create_in_memory_app().await.unwrap();
        AppState::new(services)
    }

    #[tokio::test]
    async fn test_router_creation() {
        let state = create_test_app_state().await;
        let app = create_router(state);

        let _server = TestServer::new(app).unwrap();
    }
}
