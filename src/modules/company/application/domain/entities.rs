use serde::Serialize;
use uuid::Uuid;

use crate::modules::media::application::domain::entities::FilePayload;
use crate::shared::outcome::{Failure, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    /// Stored file name of the logo.
    pub logo: Option<String>,
    pub slug: String,
}

pub const MAX_COMPANY_NAME_LEN: usize = 150;

/// Validated input for create / update. A missing `logo` keeps the current
/// one on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDraft {
    name: String,
    description: String,
    website: Option<String>,
    logo: Option<FilePayload>,
}

impl CompanyDraft {
    pub fn new(
        name: String,
        description: String,
        website: Option<String>,
        logo: Option<FilePayload>,
    ) -> Outcome<Self> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Failure::bad_request("Name cannot be empty."));
        }

        if name.chars().count() > MAX_COMPANY_NAME_LEN {
            return Err(Failure::bad_request("Name is too long."));
        }

        if logo.as_ref().is_some_and(|l| l.bytes.is_empty()) {
            return Err(Failure::bad_request("Logo file is empty."));
        }

        Ok(Self {
            name: name.to_string(),
            description,
            website: website
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty()),
            logo,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logo(&self) -> Option<&FilePayload> {
        self.logo.as_ref()
    }

    pub fn into_company(self, id: Uuid, slug: String, logo: Option<String>) -> Company {
        Company {
            id,
            name: self.name,
            description: self.description,
            website: self.website,
            logo,
            slug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::outcome::FailureKind;

    #[test]
    fn trims_name_and_blank_website() {
        let d = CompanyDraft::new(" Acme ".into(), "d".into(), Some(" ".into()), None).unwrap();
        assert_eq!(d.name(), "Acme");

        let c = d.into_company(Uuid::nil(), "acme".into(), None);
        assert_eq!(c.website, None);
    }

    #[test]
    fn rejects_blank_name_and_empty_logo() {
        let err = CompanyDraft::new("".into(), "d".into(), None, None).unwrap_err();
        assert_eq!(err.kind, FailureKind::BadRequest);

        let err = CompanyDraft::new(
            "Acme".into(),
            "d".into(),
            None,
            Some(FilePayload::new("logo.png", vec![])),
        )
        .unwrap_err();
        assert_eq!(err.kind, FailureKind::BadRequest);
    }
}
