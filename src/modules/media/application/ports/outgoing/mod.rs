pub mod file_storage;
pub mod image_optimiser;

pub use file_storage::{FileStorage, FileStorageError};
pub use image_optimiser::{ImageOptimiser, OptimiserError};
