use async_trait::async_trait;
use serde::Serialize;

use crate::shared::outcome::Outcome;

/// Rows that received a slug during one backfill pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlugBackfillReport {
    pub tags: usize,
    pub companies: usize,
    pub projects: usize,
}

#[async_trait]
pub trait BackfillSlugsUseCase: Send + Sync {
    /// Generates slugs for tags, companies and projects whose slug is blank.
    async fn execute(&self) -> Outcome<SlugBackfillReport>;
}
