use std::sync::Arc;

use crate::modules::company::application::ports::incoming::use_cases::{
    CreateCompanyUseCase, DeleteCompanyUseCase, GetCompaniesUseCase, GetCompanyUseCase,
    UpdateCompanyUseCase,
};
use crate::modules::company::application::ports::outgoing::{CompanyQuery, CompanyRepository};
use crate::modules::company::application::services::{
    CreateCompanyService, DeleteCompanyService, GetCompaniesService, GetCompanyService,
    UpdateCompanyService,
};
use crate::modules::media::application::ports::outgoing::FileStorage;

#[derive(Clone)]
pub struct CompanyUseCases {
    pub create: Arc<dyn CreateCompanyUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCompanyUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCompanyUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCompaniesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetCompanyUseCase + Send + Sync>,
}

impl CompanyUseCases {
    pub fn build<Q, R>(query: Q, repository: R, storage: Arc<dyn FileStorage>) -> Self
    where
        Q: CompanyQuery + Clone + 'static,
        R: CompanyRepository + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateCompanyService::new(
                query.clone(),
                repository.clone(),
                Arc::clone(&storage),
            )),
            update: Arc::new(UpdateCompanyService::new(
                query.clone(),
                repository.clone(),
                Arc::clone(&storage),
            )),
            delete: Arc::new(DeleteCompanyService::new(query.clone(), repository, storage)),
            get_list: Arc::new(GetCompaniesService::new(query.clone())),
            get_single: Arc::new(GetCompanyService::new(query)),
        }
    }
}
