use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Projects that referenced the company keep existing without one.
#[delete("/api/companies/{company_id}")]
pub async fn delete_company_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.company.delete.execute(path.into_inner()).await {
        Ok(_) => ApiResponse::no_content(),
        Err(e) => ApiResponse::failure(&e),
    }
}
