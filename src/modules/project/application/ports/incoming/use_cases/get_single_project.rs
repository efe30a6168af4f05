use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn by_id(&self, id: Uuid) -> Outcome<ProjectView>;

    async fn by_slug(&self, slug: &str) -> Outcome<ProjectView>;
}
