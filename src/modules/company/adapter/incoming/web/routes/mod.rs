mod create_company;
mod delete_company;
mod dto;
mod get_companies;
mod update_company;

pub use create_company::create_company_handler;
pub use delete_company::delete_company_handler;
pub use get_companies::{
    get_companies_handler, get_company_by_id_handler, get_company_by_slug_handler,
};
pub use update_company::update_company_handler;
