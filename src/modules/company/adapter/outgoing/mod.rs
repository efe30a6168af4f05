mod company_query_postgres;
mod company_repository_postgres;
pub mod sea_orm_entity;

pub use company_query_postgres::CompanyQueryPostgres;
pub use company_repository_postgres::CompanyRepositoryPostgres;
