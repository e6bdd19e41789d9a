mod bucket_name;
mod image_extension;
mod object_key;

pub use bucket_name::BucketName;
pub use image_extension::ImageExtension;
pub use object_key::ObjectKey;
