use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::outcome::{Failure, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TagType {
    #[default]
    Default,
    Backend,
    Frontend,
    DevOps,
    Other,
    Data,
    #[serde(rename = "CMS")]
    Cms,
    Mobile,
}

impl TagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::Default => "Default",
            TagType::Backend => "Backend",
            TagType::Frontend => "Frontend",
            TagType::DevOps => "DevOps",
            TagType::Other => "Other",
            TagType::Data => "Data",
            TagType::Cms => "CMS",
            TagType::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(TagType::Default),
            "backend" => Ok(TagType::Backend),
            "frontend" => Ok(TagType::Frontend),
            "devops" => Ok(TagType::DevOps),
            "other" => Ok(TagType::Other),
            "data" => Ok(TagType::Data),
            "cms" => Ok(TagType::Cms),
            "mobile" => Ok(TagType::Mobile),
            other => Err(format!("unknown tag type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    pub icon: Option<String>,
    pub custom_colour: Option<String>,
    pub slug: String,
}

//
// ──────────────────────────────────────────────────────────
// Validated input for create / update
// ──────────────────────────────────────────────────────────
//

pub const MAX_TAG_TITLE_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDraft {
    title: String,
    tag_type: TagType,
    icon: Option<String>,
    custom_colour: Option<String>,
}

impl TagDraft {
    pub fn new(
        title: String,
        tag_type: TagType,
        icon: Option<String>,
        custom_colour: Option<String>,
    ) -> Outcome<Self> {
        let title = title.trim();

        if title.is_empty() {
            return Err(Failure::bad_request("Title cannot be empty."));
        }

        if title.chars().count() > MAX_TAG_TITLE_LEN {
            return Err(Failure::bad_request("Title is too long."));
        }

        Ok(Self {
            title: title.to_string(),
            tag_type,
            icon,
            custom_colour,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn into_tag(self, id: Uuid, slug: String) -> Tag {
        Tag {
            id,
            title: self.title,
            tag_type: self.tag_type,
            icon: self.icon,
            custom_colour: self.custom_colour,
            slug,
        }
    }
}
