use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::modules::media::application::domain::entities::FilePayload;
use crate::shared::outcome::{Failure, Outcome};

pub const INVALID_FILE_CONTENT: &str = "File content must be base64 encoded.";

/// A file sent inside a JSON body.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    pub file_name: String,
    /// Standard base64, no data-URL prefix.
    pub content: String,
}

impl UploadRequest {
    pub fn into_payload(self) -> Outcome<FilePayload> {
        let bytes = STANDARD
            .decode(self.content.trim())
            .map_err(|_| Failure::bad_request(INVALID_FILE_CONTENT))?;

        Ok(FilePayload::new(self.file_name, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::outcome::FailureKind;

    #[test]
    fn decodes_base64_content() {
        let payload = UploadRequest {
            file_name: "logo.png".into(),
            content: STANDARD.encode(b"\x89PNG"),
        }
        .into_payload()
        .unwrap();

        assert_eq!(payload.file_name, "logo.png");
        assert_eq!(payload.bytes, b"\x89PNG");
    }

    #[test]
    fn rejects_garbage() {
        let err = UploadRequest {
            file_name: "logo.png".into(),
            content: "not base64 at all!".into(),
        }
        .into_payload()
        .unwrap_err();

        assert_eq!(err.kind, FailureKind::BadRequest);
        assert_eq!(err.message, INVALID_FILE_CONTENT);
    }
}
