use serde::Deserialize;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    ImageTarget, ImageType, ProjectCommand, ProjectDetails, RepoTarget,
};
use crate::modules::project::application::ports::outgoing::ProjectFilter;
use crate::shared::api::UploadRequest;
use crate::shared::outcome::Outcome;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

impl From<SearchQuery> for ProjectFilter {
    fn from(q: SearchQuery) -> Self {
        ProjectFilter { search: q.search }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    /// Existing image to keep. Absent for a new upload.
    pub id: Option<Uuid>,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    pub order: Option<i32>,
    pub file: Option<UploadRequest>,
}

impl ImageRequest {
    pub fn into_target(self) -> Outcome<ImageTarget> {
        let payload = match self.file {
            Some(file) => Some(file.into_payload()?),
            None => None,
        };

        Ok(ImageTarget {
            id: self.id,
            image_type: self.image_type,
            order: self.order,
            payload,
        })
    }
}

pub fn image_targets(requests: Vec<ImageRequest>) -> Outcome<Vec<ImageTarget>> {
    requests.into_iter().map(ImageRequest::into_target).collect()
}

#[derive(Debug, Deserialize)]
pub struct RepositoryRequest {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub order: Option<i32>,
}

impl From<RepositoryRequest> for RepoTarget {
    fn from(r: RepositoryRequest) -> Self {
        RepoTarget {
            id: r.id,
            title: r.title,
            url: r.url,
            order: r.order,
        }
    }
}

/// Full desired state of a project for create and update.
#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    pub year: i32,
    pub website: Option<String>,
    #[serde(default)]
    pub show_mockup: bool,
    pub company_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageRequest>,
    #[serde(default)]
    pub repositories: Vec<RepositoryRequest>,
}

impl ProjectRequest {
    pub fn into_command(self) -> Outcome<ProjectCommand> {
        Ok(ProjectCommand {
            details: ProjectDetails {
                title: self.title,
                short_description: self.short_description,
                description: self.description,
                year: self.year,
                website: self.website,
                show_mockup: self.show_mockup,
                company_id: self.company_id,
            },
            tags: self.tags,
            images: image_targets(self.images)?,
            repositories: self.repositories.into_iter().map(RepoTarget::from).collect(),
        })
    }
}
