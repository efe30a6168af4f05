use actix_web::{put, web, Responder};
use uuid::Uuid;

use super::dto::CompanyRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/companies/{company_id}")]
pub async fn update_company_handler(
    path: web::Path<Uuid>,
    req: web::Json<CompanyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::failure(&e),
    };

    match data.company.update.execute(path.into_inner(), draft).await {
        Ok(company) => ApiResponse::success(company),
        Err(e) => ApiResponse::failure(&e),
    }
}
