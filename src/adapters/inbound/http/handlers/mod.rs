mod gallery_handlers;
mod upload_handlers;

pub use gallery_handlers::list_gallery;
pub use upload_handlers::upload_images;
