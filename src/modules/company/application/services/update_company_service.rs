use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::store_logo;
use crate::modules::company::application::domain::entities::{Company, CompanyDraft};
use crate::modules::company::application::ports::incoming::use_cases::UpdateCompanyUseCase;
use crate::modules::company::application::ports::outgoing::{
    CompanyQuery, CompanyRepository, CompanyRepositoryError,
};
use crate::modules::media::application::ports::outgoing::FileStorage;
use crate::modules::media::application::services::release_files;
use crate::shared::outcome::Outcome;
use crate::shared::slug::slug_for;

#[derive(Clone)]
pub struct UpdateCompanyService<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    query: Q,
    repository: R,
    storage: Arc<dyn FileStorage>,
}

impl<Q, R> UpdateCompanyService<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    pub fn new(query: Q, repository: R, storage: Arc<dyn FileStorage>) -> Self {
        Self {
            query,
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateCompanyUseCase for UpdateCompanyService<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    async fn execute(&self, id: Uuid, draft: CompanyDraft) -> Outcome<Company> {
        let existing = self.query.get_by_id(id).await?;

        if self.query.name_exists(draft.name(), Some(id)).await? {
            return Err(CompanyRepositoryError::NameAlreadyExists.into());
        }

        let new_logo = match draft.logo() {
            Some(payload) => Some(store_logo(self.storage.as_ref(), payload).await?),
            None => None,
        };

        let slug = slug_for(draft.name());
        let logo = new_logo.clone().or(existing.logo.clone());
        let company = draft.into_company(id, slug, logo);

        match self.repository.update_company(company).await {
            Ok(updated) => {
                if new_logo.is_some() {
                    release_files(self.storage.as_ref(), existing.logo).await;
                }
                info!(company_id = %id, "Company updated");
                Ok(updated)
            }
            Err(e) => {
                release_files(self.storage.as_ref(), new_logo).await;
                Err(e.into())
            }
        }
    }
}
