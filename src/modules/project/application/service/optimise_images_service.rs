use async_trait::async_trait;
use tracing::{info, warn};

use super::image_sync::ImageSync;
use crate::modules::media::application::services::release_files;
use crate::modules::project::application::domain::entities::ProjectImage;
use crate::modules::project::application::ports::incoming::use_cases::OptimiseImagesUseCase;
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::shared::outcome::Outcome;

/// Re-runs stored images that were saved unoptimised through the optimiser.
/// Images that fail at any step are left as they are.
pub struct OptimiseImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
    images: ImageSync,
}

impl<Q, R> OptimiseImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(query: Q, repository: R, images: ImageSync) -> Self {
        Self {
            query,
            repository,
            images,
        }
    }

    async fn optimise_one(&self, image: &ProjectImage) -> bool {
        let storage = self.images.storage();

        let original = match storage.read(&image.image).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(image_id = %image.id, error = %e, "Stored image unreadable, skipping");
                return false;
            }
        };

        let optimised = match self.images.try_optimise(&original).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(image_id = %image.id, error = %e, "Optimiser failed, skipping");
                return false;
            }
        };

        let stored = match storage.save(&optimised, &image.image).await {
            Ok(name) => name,
            Err(e) => {
                warn!(image_id = %image.id, error = %e, "Could not store optimised image");
                return false;
            }
        };

        if let Err(e) = self.repository.mark_image_optimised(image.id, &stored).await {
            warn!(image_id = %image.id, error = %e, "Could not record optimised image");
            release_files(storage, [stored]).await;
            return false;
        }

        release_files(storage, [image.image.clone()]).await;
        true
    }
}

#[async_trait]
impl<Q, R> OptimiseImagesUseCase for OptimiseImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(&self) -> Outcome<usize> {
        let pending = self.query.unoptimised_images().await?;

        let mut optimised = 0;
        for image in &pending {
            if self.optimise_one(image).await {
                optimised += 1;
            }
        }

        info!(pending = pending.len(), optimised, "Image optimisation pass finished");

        Ok(optimised)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::infrastructure::memory_store::MemoryStore;
    use crate::modules::project::application::domain::entities::ImageType;
    use crate::modules::project::application::domain::relation_sync::RelationChanges;
    use crate::modules::project::application::ports::outgoing::ProjectChangeset;
    use crate::tests::support::fixtures::project;
    use crate::tests::support::media_doubles::{FixedOptimiser, InMemoryFileStorage};

    fn image(project_id: Uuid, file: &str, is_optimised: bool) -> ProjectImage {
        ProjectImage {
            id: Uuid::now_v7(),
            project_id,
            image: file.into(),
            image_type: ImageType::Desktop,
            order: None,
            is_optimised,
        }
    }

    async fn seeded(files: &InMemoryFileStorage) -> (MemoryStore, Uuid) {
        let store = MemoryStore::default();
        let row = project("Atlas", 2024);
        let id = row.id;

        files.insert("raw.png", b"raw");
        files.insert("done.png", b"done");

        store
            .insert_project(ProjectChangeset {
                project: row,
                tag_ids: vec![],
                images: RelationChanges {
                    create: vec![
                        image(id, "raw.png", false),
                        image(id, "gone.png", false),
                        image(id, "done.png", true),
                    ],
                    ..Default::default()
                },
                repositories: Default::default(),
            })
            .await
            .unwrap();

        (store, id)
    }

    fn service(
        store: &MemoryStore,
        files: &InMemoryFileStorage,
        optimiser: FixedOptimiser,
    ) -> OptimiseImagesService<MemoryStore, MemoryStore> {
        OptimiseImagesService::new(
            store.clone(),
            store.clone(),
            ImageSync::new(Arc::new(files.clone()), Arc::new(optimiser)),
        )
    }

    #[tokio::test]
    async fn optimises_readable_images_and_skips_missing_files() {
        let files = InMemoryFileStorage::default();
        let (store, id) = seeded(&files).await;

        let count = service(&store, &files, FixedOptimiser::returning(b"small"))
            .execute()
            .await
            .unwrap();

        assert_eq!(count, 1);
        assert!(!files.contains("raw.png"));
        assert!(files.contains("done.png"));

        let images = store.images(id).await.unwrap();
        let replaced = images
            .iter()
            .find(|i| i.image != "gone.png" && i.image != "done.png")
            .unwrap();
        assert!(replaced.is_optimised);
        assert_eq!(files.get(&replaced.image), Some(b"small".to_vec()));

        let pending = store.unoptimised_images().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].image, "gone.png");
    }

    #[tokio::test]
    async fn optimiser_failure_changes_nothing() {
        let files = InMemoryFileStorage::default();
        let (store, _) = seeded(&files).await;

        let count = service(&store, &files, FixedOptimiser::failing())
            .execute()
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert!(files.contains("raw.png"));
        assert_eq!(store.unoptimised_images().await.unwrap().len(), 2);
    }
}
