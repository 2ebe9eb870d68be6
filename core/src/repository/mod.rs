pub mod export;
pub mod traits;

// Re-export
pub use export::{default_data_dir, FileExportRepository};
pub use traits::ExportRepository;
