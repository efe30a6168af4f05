use async_trait::async_trait;

use crate::modules::media::application::domain::entities::MediaFile;
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait GetMediaUseCase: Send + Sync {
    async fn execute(&self, file_name: &str) -> Outcome<MediaFile>;
}
