pub mod file_release;
pub mod get_media_service;

pub use file_release::release_files;
pub use get_media_service::GetMediaService;
