use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::store_logo;
use crate::modules::company::application::domain::entities::{Company, CompanyDraft};
use crate::modules::company::application::ports::incoming::use_cases::CreateCompanyUseCase;
use crate::modules::company::application::ports::outgoing::{
    CompanyQuery, CompanyRepository, CompanyRepositoryError,
};
use crate::modules::media::application::ports::outgoing::FileStorage;
use crate::modules::media::application::services::release_files;
use crate::shared::outcome::Outcome;
use crate::shared::slug::slug_for;

#[derive(Clone)]
pub struct CreateCompanyService<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    query: Q,
    repository: R,
    storage: Arc<dyn FileStorage>,
}

impl<Q, R> CreateCompanyService<Q, R>
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
impl<Q, R> CreateCompanyUseCase for CreateCompanyService<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    async fn execute(&self, draft: CompanyDraft) -> Outcome<Company> {
        if self.query.name_exists(draft.name(), None).await? {
            return Err(CompanyRepositoryError::NameAlreadyExists.into());
        }

        let logo = match draft.logo() {
            Some(payload) => Some(store_logo(self.storage.as_ref(), payload).await?),
            None => None,
        };

        let slug = slug_for(draft.name());
        let company = draft.into_company(Uuid::now_v7(), slug, logo.clone());

        match self.repository.create_company(company).await {
            Ok(created) => {
                info!(company_id = %created.id, "Company created");
                Ok(created)
            }
            Err(e) => {
                release_files(self.storage.as_ref(), logo).await;
                Err(e.into())
            }
        }
    }
}
