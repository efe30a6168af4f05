use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::Company;
use crate::modules::company::application::ports::incoming::use_cases::{
    GetCompaniesUseCase, GetCompanyUseCase,
};
use crate::modules::company::application::ports::outgoing::CompanyQuery;
use crate::shared::outcome::Outcome;
use crate::shared::text_match::normalize_search;

#[derive(Debug, Clone)]
pub struct GetCompaniesService<Q: CompanyQuery> {
    query: Q,
}

impl<Q: CompanyQuery> GetCompaniesService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: CompanyQuery> GetCompaniesUseCase for GetCompaniesService<Q> {
    async fn execute(&self, search: Option<String>) -> Outcome<Vec<Company>> {
        Ok(self.query.list(normalize_search(search)).await?)
    }
}

#[derive(Debug, Clone)]
pub struct GetCompanyService<Q: CompanyQuery> {
    query: Q,
}

impl<Q: CompanyQuery> GetCompanyService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: CompanyQuery> GetCompanyUseCase for GetCompanyService<Q> {
    async fn by_id(&self, id: Uuid) -> Outcome<Company> {
        Ok(self.query.get_by_id(id).await?)
    }

    async fn by_slug(&self, slug: &str) -> Outcome<Company> {
        Ok(self.query.get_by_slug(slug).await?)
    }
}
