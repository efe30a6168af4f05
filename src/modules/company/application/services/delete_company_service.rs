use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::Company;
use crate::modules::company::application::ports::incoming::use_cases::DeleteCompanyUseCase;
use crate::modules::company::application::ports::outgoing::{CompanyQuery, CompanyRepository};
use crate::modules::media::application::ports::outgoing::FileStorage;
use crate::modules::media::application::services::release_files;
use crate::shared::outcome::Outcome;

#[derive(Clone)]
pub struct DeleteCompanyService<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    query: Q,
    repository: R,
    storage: Arc<dyn FileStorage>,
}

impl<Q, R> DeleteCompanyService<Q, R>
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
impl<Q, R> DeleteCompanyUseCase for DeleteCompanyService<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    async fn execute(&self, id: Uuid) -> Outcome<Company> {
        let company = self.query.get_by_id(id).await?;
        self.repository.delete_company(id).await?;

        release_files(self.storage.as_ref(), company.logo.clone()).await;

        info!(company_id = %id, "Company deleted");
        Ok(company)
    }
}
