use actix_web::{get, web, Responder};

use super::dto::SearchQuery;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_list.execute(query.into_inner().into()).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => ApiResponse::failure(&e),
    }
}
