use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{ImageTarget, ProjectImage};
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait GetProjectImagesUseCase: Send + Sync {
    async fn list(&self, project_id: Uuid) -> Outcome<Vec<ProjectImage>>;

    async fn get(&self, project_id: Uuid, image_id: Uuid) -> Outcome<ProjectImage>;
}

#[async_trait]
pub trait SyncProjectImagesUseCase: Send + Sync {
    /// Returns the reconciled collection.
    async fn execute(
        &self,
        project_id: Uuid,
        targets: Vec<ImageTarget>,
    ) -> Outcome<Vec<ProjectImage>>;
}

#[async_trait]
pub trait OptimiseImagesUseCase: Send + Sync {
    /// Number of images optimised by this pass.
    async fn execute(&self) -> Outcome<usize>;
}
