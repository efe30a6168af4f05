use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::relation_sync::{SyncChild, SyncTarget};
use crate::modules::media::application::domain::entities::FilePayload;
use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::outcome::{Failure, Outcome};

//
// ──────────────────────────────────────────────────────────
// Image type
// ──────────────────────────────────────────────────────────
//

/// Declaration order is the presentation order of image categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImageType {
    Logo,
    Banner,
    Card,
    Desktop,
    Mobile,
}

impl ImageType {
    /// At most one image of these kinds per project.
    pub fn is_single_occupancy(self) -> bool {
        matches!(self, ImageType::Logo | ImageType::Banner | ImageType::Card)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Logo => "Logo",
            ImageType::Banner => "Banner",
            ImageType::Card => "Card",
            ImageType::Desktop => "Desktop",
            ImageType::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "logo" => Ok(ImageType::Logo),
            "banner" => Ok(ImageType::Banner),
            "card" => Ok(ImageType::Card),
            "desktop" => Ok(ImageType::Desktop),
            "mobile" => Ok(ImageType::Mobile),
            other => Err(format!("unknown image type: {other}")),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Children
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectImage {
    pub id: Uuid,
    pub project_id: Uuid,
    /// Stored file name, resolvable through the media route.
    pub image: String,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    pub order: Option<i32>,
    pub is_optimised: bool,
}

impl SyncChild for ProjectImage {
    type Kind = ImageType;

    fn id(&self) -> Uuid {
        self.id
    }

    fn kind(&self) -> ImageType {
        self.image_type
    }

    fn order(&self) -> Option<i32> {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = Some(order);
    }
}

/// A source repository link shown on a project page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRepo {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub url: String,
    pub order: Option<i32>,
}

impl SyncChild for ProjectRepo {
    type Kind = ();

    fn id(&self) -> Uuid {
        self.id
    }

    fn kind(&self) {}

    fn order(&self) -> Option<i32> {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = Some(order);
    }
}

//
// ──────────────────────────────────────────────────────────
// Sync targets
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTarget {
    pub id: Option<Uuid>,
    pub image_type: ImageType,
    pub order: Option<i32>,
    /// Required when `id` is empty, ignored otherwise.
    pub payload: Option<FilePayload>,
}

impl SyncTarget for ImageTarget {
    type Kind = ImageType;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn kind(&self) -> ImageType {
        self.image_type
    }

    fn order(&self) -> Option<i32> {
        self.order
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub id: Option<Uuid>,
    pub title: String,
    pub url: String,
    pub order: Option<i32>,
}

impl SyncTarget for RepoTarget {
    type Kind = ();

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn kind(&self) {}

    fn order(&self) -> Option<i32> {
        self.order
    }
}

//
// ──────────────────────────────────────────────────────────
// Project aggregate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub year: i32,
    pub website: Option<String>,
    pub show_mockup: bool,
    pub company_id: Option<Uuid>,
    pub slug: String,
}

/// A project with its relations loaded: images by category then order,
/// repositories by order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub tags: Vec<Tag>,
    pub images: Vec<ProjectImage>,
    pub repositories: Vec<ProjectRepo>,
}

pub const MAX_PROJECT_TITLE_LEN: usize = 200;

/// Scalar fields of a project as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub year: i32,
    pub website: Option<String>,
    pub show_mockup: bool,
    pub company_id: Option<Uuid>,
}

impl ProjectDetails {
    pub fn validate(mut self) -> Outcome<Self> {
        self.title = self.title.trim().to_string();

        if self.title.is_empty() {
            return Err(Failure::bad_request("Title cannot be empty."));
        }

        if self.title.chars().count() > MAX_PROJECT_TITLE_LEN {
            return Err(Failure::bad_request("Title is too long."));
        }

        self.website = self
            .website
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());

        Ok(self)
    }

    pub fn into_project(self, id: Uuid, slug: String) -> Project {
        Project {
            id,
            title: self.title,
            short_description: self.short_description,
            description: self.description,
            year: self.year,
            website: self.website,
            show_mockup: self.show_mockup,
            company_id: self.company_id,
            slug,
        }
    }
}

/// Full desired state of a project for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCommand {
    pub details: ProjectDetails,
    pub tags: Vec<String>,
    pub images: Vec<ImageTarget>,
    pub repositories: Vec<RepoTarget>,
}
