pub mod error;
pub mod grid;
pub mod metadata;
pub mod region;
pub mod version_db;
