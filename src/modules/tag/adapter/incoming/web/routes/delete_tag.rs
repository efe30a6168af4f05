use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/tags/{tag_id}")]
pub async fn delete_tag_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tag.delete.execute(path.into_inner()).await {
        Ok(_) => ApiResponse::no_content(),
        Err(e) => ApiResponse::failure(&e),
    }
}
