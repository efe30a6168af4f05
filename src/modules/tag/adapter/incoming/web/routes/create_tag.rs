use actix_web::{post, web, Responder};

use super::dto::TagRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/tags")]
pub async fn create_tag_handler(
    req: web::Json<TagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::failure(&e),
    };

    match data.tag.create.execute(draft).await {
        Ok(tag) => ApiResponse::created(tag),
        Err(e) => ApiResponse::failure(&e),
    }
}
