use serde::Deserialize;

use crate::modules::tag::application::domain::entities::{TagDraft, TagType};
use crate::shared::outcome::Outcome;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub title: String,
    #[serde(rename = "type", default)]
    pub tag_type: TagType,
    pub icon: Option<String>,
    pub custom_colour: Option<String>,
}

impl TagRequest {
    pub fn into_draft(self) -> Outcome<TagDraft> {
        TagDraft::new(self.title, self.tag_type, self.icon, self.custom_colour)
    }
}
