use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::media::application::ports::outgoing::{
    FileStorage, ImageOptimiser, OptimiserError,
};
use crate::modules::media::application::services::release_files;
use crate::modules::project::application::domain::entities::{
    ImageTarget, ImageType, ProjectImage,
};
use crate::modules::project::application::domain::relation_sync::{plan_sync, RelationChanges};
use crate::shared::outcome::{Failure, Outcome};

pub const IMAGE_FILE_REQUIRED: &str = "A file is required for every new image.";
pub const IMAGE_NOT_STORED: &str = "The image could not be stored.";

/// Files touched by a prepared image sync. Which set gets released depends
/// on whether the row changes commit.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StagedFiles {
    stored: Vec<String>,
    released: Vec<String>,
}

impl StagedFiles {
    pub fn stored(&self) -> &[String] {
        &self.stored
    }

    pub fn released(&self) -> &[String] {
        &self.released
    }
}

#[derive(Debug, Default)]
pub struct PreparedImages {
    pub changes: RelationChanges<ProjectImage>,
    pub files: StagedFiles,
}

/// File side of an image relation sync: stores payloads for new images
/// before the row write and releases files after it.
#[derive(Clone)]
pub struct ImageSync {
    storage: Arc<dyn FileStorage>,
    optimiser: Arc<dyn ImageOptimiser>,
}

impl ImageSync {
    pub fn new(storage: Arc<dyn FileStorage>, optimiser: Arc<dyn ImageOptimiser>) -> Self {
        Self { storage, optimiser }
    }

    pub fn storage(&self) -> &dyn FileStorage {
        self.storage.as_ref()
    }

    /// Plans the diff and stores every new payload. On failure, payloads
    /// stored so far are released and nothing is returned.
    pub async fn prepare(
        &self,
        project_id: Uuid,
        current: Vec<ProjectImage>,
        targets: Vec<ImageTarget>,
    ) -> Outcome<PreparedImages> {
        let plan = plan_sync(current, targets, ImageType::is_single_occupancy);

        let mut prepared = PreparedImages {
            changes: RelationChanges {
                delete_ids: plan.to_delete.iter().map(|i| i.id).collect(),
                create: Vec::with_capacity(plan.to_create.len()),
                reorder: plan.reordered,
            },
            files: StagedFiles {
                stored: Vec::new(),
                released: plan.to_delete.into_iter().map(|i| i.image).collect(),
            },
        };

        for target in plan.to_create {
            match self.store_new(project_id, target).await {
                Ok(image) => {
                    prepared.files.stored.push(image.image.clone());
                    prepared.changes.create.push(image);
                }
                Err(failure) => {
                    self.rollback(prepared.files).await;
                    return Err(failure);
                }
            }
        }

        Ok(prepared)
    }

    /// Row changes are durable: drop the files of deleted images.
    pub async fn commit(&self, files: StagedFiles) {
        release_files(self.storage.as_ref(), files.released).await;
    }

    /// Row changes were not written: drop the newly stored files.
    pub async fn rollback(&self, files: StagedFiles) {
        release_files(self.storage.as_ref(), files.stored).await;
    }

    pub async fn try_optimise(&self, bytes: &[u8]) -> Result<Vec<u8>, OptimiserError> {
        self.optimiser.optimise(bytes).await
    }

    /// Optimised bytes and `true`, or the input and `false` when the
    /// optimiser declines or fails.
    pub async fn optimise_or_keep(&self, bytes: &[u8]) -> (Vec<u8>, bool) {
        match self.try_optimise(bytes).await {
            Ok(optimised) => (optimised, true),
            Err(OptimiserError::Disabled) => {
                debug!("Image optimiser disabled, storing original");
                (bytes.to_vec(), false)
            }
            Err(e) => {
                warn!(error = %e, "Image optimisation failed, keeping original");
                (bytes.to_vec(), false)
            }
        }
    }

    async fn store_new(&self, project_id: Uuid, target: ImageTarget) -> Outcome<ProjectImage> {
        let payload = target
            .payload
            .filter(|p| !p.bytes.is_empty())
            .ok_or_else(|| Failure::bad_request(IMAGE_FILE_REQUIRED))?;

        let (bytes, is_optimised) = self.optimise_or_keep(&payload.bytes).await;

        let name = self
            .storage
            .save(&bytes, &payload.file_name)
            .await
            .map_err(|e| {
                warn!(error = %e, file = %payload.file_name, "Failed to store image");
                Failure::bad_request(IMAGE_NOT_STORED)
            })?;

        debug!(file = %name, kind = %target.image_type, is_optimised, "Stored project image");

        Ok(ProjectImage {
            id: Uuid::now_v7(),
            project_id,
            image: name,
            image_type: target.image_type,
            order: target.order,
            is_optimised,
        })
    }
}
