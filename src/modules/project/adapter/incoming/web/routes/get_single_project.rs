use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/{project_id}")]
pub async fn get_project_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_single.by_id(path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[get("/api/projects/slug/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_single.by_slug(&path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => ApiResponse::failure(&e),
    }
}
