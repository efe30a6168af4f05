pub mod local_file_storage;
pub mod tinify_optimiser;

pub use local_file_storage::LocalFileStorage;
pub use tinify_optimiser::{DisabledOptimiser, TinifyOptimiser};
