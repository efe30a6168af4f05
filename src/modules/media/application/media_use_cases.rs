use std::sync::Arc;

use crate::modules::media::application::ports::incoming::use_cases::GetMediaUseCase;
use crate::modules::media::application::ports::outgoing::FileStorage;
use crate::modules::media::application::services::GetMediaService;

#[derive(Clone)]
pub struct MediaUseCases {
    pub get: Arc<dyn GetMediaUseCase + Send + Sync>,
}

impl MediaUseCases {
    pub fn build(storage: Arc<dyn FileStorage>) -> Self {
        Self {
            get: Arc::new(GetMediaService::new(storage)),
        }
    }
}
