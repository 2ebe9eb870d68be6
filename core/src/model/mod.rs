pub mod entry;
pub mod export;
pub mod range;
pub mod summary;
