use serde::Deserialize;

use crate::modules::company::application::domain::entities::CompanyDraft;
use crate::shared::api::UploadRequest;
use crate::shared::outcome::Outcome;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompanyRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub website: Option<String>,
    /// Omit on update to keep the current logo.
    pub logo: Option<UploadRequest>,
}

impl CompanyRequest {
    pub fn into_draft(self) -> Outcome<CompanyDraft> {
        let logo = match self.logo {
            Some(upload) => Some(upload.into_payload()?),
            None => None,
        };

        CompanyDraft::new(self.name, self.description, self.website, logo)
    }
}
