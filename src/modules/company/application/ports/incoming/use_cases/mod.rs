pub mod create_company;
pub mod delete_company;
pub mod get_companies;
pub mod update_company;

pub use create_company::CreateCompanyUseCase;
pub use delete_company::DeleteCompanyUseCase;
pub use get_companies::{GetCompaniesUseCase, GetCompanyUseCase};
pub use update_company::UpdateCompanyUseCase;
