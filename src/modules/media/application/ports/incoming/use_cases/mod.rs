pub mod get_media;

pub use get_media::GetMediaUseCase;
