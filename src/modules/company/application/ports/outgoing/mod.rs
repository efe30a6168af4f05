pub mod company_query;
pub mod company_repository;

pub use company_query::{CompanyQuery, CompanyQueryError, COMPANY_NOT_FOUND};
pub use company_repository::{CompanyRepository, CompanyRepositoryError};
