use std::sync::Arc;

use crate::modules::maintenance::application::ports::incoming::use_cases::BackfillSlugsUseCase;

#[derive(Clone)]
pub struct MaintenanceUseCases {
    pub backfill_slugs: Arc<dyn BackfillSlugsUseCase + Send + Sync>,
}
