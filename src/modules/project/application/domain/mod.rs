pub mod entities;
pub mod relation_sync;
