pub mod create_company_service;
pub mod delete_company_service;
pub mod get_companies_service;
pub mod update_company_service;

pub use create_company_service::CreateCompanyService;
pub use delete_company_service::DeleteCompanyService;
pub use get_companies_service::{GetCompaniesService, GetCompanyService};
pub use update_company_service::UpdateCompanyService;

use crate::modules::media::application::domain::entities::FilePayload;
use crate::modules::media::application::ports::outgoing::FileStorage;
use crate::shared::outcome::{Failure, Outcome};

pub(crate) async fn store_logo(storage: &dyn FileStorage, logo: &FilePayload) -> Outcome<String> {
    storage
        .save(&logo.bytes, &logo.file_name)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to store company logo");
            Failure::bad_request("The logo could not be stored.")
        })
}
