use async_trait::async_trait;
use uuid::Uuid;

use super::MemoryStore;
use crate::modules::company::application::domain::entities::Company;
use crate::modules::company::application::ports::outgoing::{
    CompanyQuery, CompanyQueryError, CompanyRepository, CompanyRepositoryError,
};
use crate::shared::slug::normalize_slug;

impl MemoryStore {
    fn company_conflict(
        &self,
        companies: &[Company],
        candidate: &Company,
    ) -> Option<CompanyRepositoryError> {
        for other in companies.iter().filter(|c| c.id != candidate.id) {
            if self.matcher.equals(&other.name, &candidate.name) {
                return Some(CompanyRepositoryError::NameAlreadyExists);
            }
            if !candidate.slug.is_empty() && other.slug == candidate.slug {
                return Some(CompanyRepositoryError::SlugAlreadyExists);
            }
        }
        None
    }
}

#[async_trait]
impl CompanyQuery for MemoryStore {
    async fn list(&self, search: Option<String>) -> Result<Vec<Company>, CompanyQueryError> {
        let state = self.state.read().await;

        let mut companies: Vec<Company> = state
            .companies
            .iter()
            .filter(|c| {
                self.matches_search(search.as_deref(), &[c.name.as_str(), c.description.as_str()])
            })
            .cloned()
            .collect();
        companies.sort_by_key(|c| c.name.to_lowercase());

        Ok(companies)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Company, CompanyQueryError> {
        let state = self.state.read().await;
        state
            .companies
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CompanyQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Company, CompanyQueryError> {
        let slug = normalize_slug(slug);
        let state = self.state.read().await;
        state
            .companies
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or(CompanyQueryError::NotFound)
    }

    async fn name_exists(
        &self,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, CompanyQueryError> {
        let state = self.state.read().await;
        Ok(state
            .companies
            .iter()
            .any(|c| Some(c.id) != exclude && self.matcher.equals(&c.name, name)))
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn create_company(&self, company: Company) -> Result<Company, CompanyRepositoryError> {
        let mut state = self.state.write().await;

        if let Some(err) = self.company_conflict(&state.companies, &company) {
            return Err(err);
        }

        state.companies.push(company.clone());
        Ok(company)
    }

    async fn update_company(&self, company: Company) -> Result<Company, CompanyRepositoryError> {
        let mut state = self.state.write().await;

        if let Some(err) = self.company_conflict(&state.companies, &company) {
            return Err(err);
        }

        let slot = state
            .companies
            .iter_mut()
            .find(|c| c.id == company.id)
            .ok_or(CompanyRepositoryError::NotFound)?;
        *slot = company.clone();

        Ok(company)
    }

    async fn delete_company(&self, id: Uuid) -> Result<(), CompanyRepositoryError> {
        let mut state = self.state.write().await;

        let before = state.companies.len();
        state.companies.retain(|c| c.id != id);
        if state.companies.len() == before {
            return Err(CompanyRepositoryError::NotFound);
        }

        for project in state.projects.iter_mut() {
            if project.company_id == Some(id) {
                project.company_id = None;
            }
        }
        Ok(())
    }

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), CompanyRepositoryError> {
        let mut state = self.state.write().await;

        if state.companies.iter().any(|c| c.id != id && c.slug == slug) {
            return Err(CompanyRepositoryError::SlugAlreadyExists);
        }

        let company = state
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CompanyRepositoryError::NotFound)?;
        company.slug = slug.to_string();

        Ok(())
    }
}
