use actix_web::{post, web, Responder};

use super::dto::ProjectRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(e) => return ApiResponse::failure(&e),
    };

    match data.project.create.execute(command).await {
        Ok(view) => ApiResponse::created(view),
        Err(e) => ApiResponse::failure(&e),
    }
}
