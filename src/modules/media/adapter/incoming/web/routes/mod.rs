mod serve_media;

pub use serve_media::serve_media_handler;
