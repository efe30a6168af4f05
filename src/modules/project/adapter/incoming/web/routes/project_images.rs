use actix_web::{get, put, web, Responder};
use serde::Serialize;
use uuid::Uuid;

use super::dto::{image_targets, ImageRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct OptimiseResponse {
    pub optimised: usize,
}

#[get("/api/projects/{project_id}/images")]
pub async fn get_project_images_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_images.list(path.into_inner()).await {
        Ok(images) => ApiResponse::success(images),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[get("/api/projects/{project_id}/images/{image_id}")]
pub async fn get_project_image_handler(
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (project_id, image_id) = path.into_inner();

    match data.project.get_images.get(project_id, image_id).await {
        Ok(image) => ApiResponse::success(image),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[put("/api/projects/{project_id}/images")]
pub async fn sync_project_images_handler(
    path: web::Path<Uuid>,
    req: web::Json<Vec<ImageRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let targets = match image_targets(req.into_inner()) {
        Ok(targets) => targets,
        Err(e) => return ApiResponse::failure(&e),
    };

    match data
        .project
        .sync_images
        .execute(path.into_inner(), targets)
        .await
    {
        Ok(images) => ApiResponse::success(images),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[put("/api/project-images/optimise")]
pub async fn optimise_images_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.optimise_images.execute().await {
        Ok(optimised) => ApiResponse::success(OptimiseResponse { optimised }),
        Err(e) => ApiResponse::failure(&e),
    }
}
