use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/{project_id}/related")]
pub async fn get_related_projects_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_related.execute(path.into_inner()).await {
        Ok(related) => ApiResponse::success(related),
        Err(e) => ApiResponse::failure(&e),
    }
}
