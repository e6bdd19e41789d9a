pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{create_router, AppState, MAX_UPLOAD_BYTES};
