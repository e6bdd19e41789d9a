pub mod gateway;

pub use gateway::{StorageGateway, DEFAULT_PRESIGN_TTL};
