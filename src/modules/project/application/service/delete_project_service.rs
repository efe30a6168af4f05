use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::image_sync::ImageSync;
use crate::modules::media::application::services::release_files;
use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectUseCase;
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::shared::outcome::Outcome;

pub struct DeleteProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
    images: ImageSync,
}

impl<Q, R> DeleteProjectService<Q, R>
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
}

#[async_trait]
impl<Q, R> DeleteProjectUseCase for DeleteProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(&self, id: Uuid) -> Outcome<ProjectView> {
        let snapshot = self.query.get_by_id(id).await?;

        self.repository.delete_project(id).await?;

        release_files(
            self.images.storage(),
            snapshot
                .images
                .iter()
                .map(|i| i.image.clone())
                .collect::<Vec<String>>(),
        )
        .await;

        info!(project_id = %id, "Project deleted");

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::infrastructure::memory_store::MemoryStore;
    use crate::modules::project::application::domain::entities::{
        ImageType, Project, ProjectImage, ProjectRepo,
    };
    use crate::modules::project::application::domain::relation_sync::RelationChanges;
    use crate::modules::project::application::ports::outgoing::{
        ProjectChangeset, ProjectRepositoryError, PROJECT_NOT_FOUND,
    };
    use crate::modules::tag::application::domain::entities::{Tag, TagType};
    use crate::modules::tag::application::ports::outgoing::{TagQuery, TagRepository};
    use crate::shared::outcome::FailureKind;
    use crate::tests::support::fixtures::project;
    use crate::tests::support::media_doubles::{FixedOptimiser, InMemoryFileStorage};

    fn service_over(
        store: &MemoryStore,
        files: &InMemoryFileStorage,
    ) -> DeleteProjectService<MemoryStore, MemoryStore> {
        DeleteProjectService::new(
            store.clone(),
            store.clone(),
            ImageSync::new(Arc::new(files.clone()), Arc::new(FixedOptimiser::failing())),
        )
    }

    async fn seed(store: &MemoryStore, files: &InMemoryFileStorage) -> Project {
        let tag = store
            .create_tag(Tag {
                id: Uuid::now_v7(),
                title: "Rust".into(),
                tag_type: TagType::Backend,
                icon: None,
                custom_colour: None,
                slug: "rust".into(),
            })
            .await
            .unwrap();

        let project = project("Atlas", 2024);
        let image = ProjectImage {
            id: Uuid::now_v7(),
            project_id: project.id,
            image: "atlas.png".into(),
            image_type: ImageType::Desktop,
            order: None,
            is_optimised: true,
        };
        files.insert("atlas.png", b"x");

        store
            .insert_project(ProjectChangeset {
                project: project.clone(),
                tag_ids: vec![tag.id],
                images: RelationChanges {
                    create: vec![image],
                    ..Default::default()
                },
                repositories: RelationChanges::default(),
            })
            .await
            .unwrap();

        project
    }

    #[tokio::test]
    async fn returns_snapshot_and_releases_files() {
        let store = MemoryStore::default();
        let files = InMemoryFileStorage::default();
        let project = seed(&store, &files).await;

        let snapshot = service_over(&store, &files).execute(project.id).await.unwrap();

        assert_eq!(snapshot.project, project);
        assert_eq!(snapshot.tags.len(), 1);
        assert_eq!(snapshot.images.len(), 1);
        assert!(!files.contains("atlas.png"));
        assert!(!store.exists(project.id).await.unwrap());
        assert_eq!(TagQuery::list(&store, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let store = MemoryStore::default();
        let files = InMemoryFileStorage::default();

        let err = service_over(&store, &files)
            .execute(Uuid::now_v7())
            .await
            .unwrap_err();

        assert_eq!(err.kind, FailureKind::NotFound);
        assert_eq!(err.message, PROJECT_NOT_FOUND);
    }

    #[tokio::test]
    async fn failed_delete_keeps_files() {
        #[derive(Clone)]
        struct Unreachable;

        #[async_trait]
        impl ProjectRepository for Unreachable {
            async fn insert_project(
                &self,
                _c: ProjectChangeset,
            ) -> Result<(), ProjectRepositoryError> {
                unimplemented!()
            }
            async fn update_project(
                &self,
                _c: ProjectChangeset,
            ) -> Result<(), ProjectRepositoryError> {
                unimplemented!()
            }
            async fn delete_project(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
                Err(ProjectRepositoryError::DatabaseError("connection refused".into()))
            }
            async fn apply_image_changes(
                &self,
                _p: Uuid,
                _c: RelationChanges<ProjectImage>,
            ) -> Result<(), ProjectRepositoryError> {
                unimplemented!()
            }
            async fn apply_repository_changes(
                &self,
                _p: Uuid,
                _c: RelationChanges<ProjectRepo>,
            ) -> Result<(), ProjectRepositoryError> {
                unimplemented!()
            }
            async fn mark_image_optimised(
                &self,
                _i: Uuid,
                _n: &str,
            ) -> Result<(), ProjectRepositoryError> {
                unimplemented!()
            }
            async fn set_slug(&self, _id: Uuid, _s: &str) -> Result<(), ProjectRepositoryError> {
                unimplemented!()
            }
        }

        let store = MemoryStore::default();
        let files = InMemoryFileStorage::default();
        let project = seed(&store, &files).await;

        let service = DeleteProjectService::new(
            store.clone(),
            Unreachable,
            ImageSync::new(Arc::new(files.clone()), Arc::new(FixedOptimiser::failing())),
        );
        let err = service.execute(project.id).await.unwrap_err();

        assert_eq!(err.kind, FailureKind::Internal);
        assert!(files.contains("atlas.png"));
    }
}
