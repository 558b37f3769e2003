pub mod gallery_db;
pub mod json_store;
pub mod reviews_db;
