use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::dto::SearchQuery;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/companies")]
pub async fn get_companies_handler(
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.company.get_list.execute(query.into_inner().search).await {
        Ok(companies) => ApiResponse::success(companies),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[get("/api/companies/{company_id}")]
pub async fn get_company_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.company.get_single.by_id(path.into_inner()).await {
        Ok(company) => ApiResponse::success(company),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[get("/api/companies/slug/{slug}")]
pub async fn get_company_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.company.get_single.by_slug(&path.into_inner()).await {
        Ok(company) => ApiResponse::success(company),
        Err(e) => ApiResponse::failure(&e),
    }
}
