pub mod image;
pub mod upload;

pub use image::*;
pub use upload::*;
