pub mod error;
pub mod iter;
pub mod mapping;
pub mod record;
pub mod types;
