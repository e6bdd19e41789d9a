mod gallery_lister;
mod object_namer;
mod upload_pipeline;
mod upload_validator;

pub use gallery_lister::GalleryLister;
pub use object_namer::ObjectNamer;
pub use upload_pipeline::UploadPipeline;
pub use upload_validator::UploadValidator;
