mod json_config;
mod response;
mod upload;

pub use json_config::custom_json_config;
pub use response::{status_for, ApiError, ApiResponse};
pub use upload::{UploadRequest, INVALID_FILE_CONTENT};
