use actix_web::{put, web, Responder};
use uuid::Uuid;

use super::dto::TagRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/tags/{tag_id}")]
pub async fn update_tag_handler(
    path: web::Path<Uuid>,
    req: web::Json<TagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::failure(&e),
    };

    match data.tag.update.execute(path.into_inner(), draft).await {
        Ok(tag) => ApiResponse::success(tag),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::tag::adapter::incoming::web::routes::create_tag_handler;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn rename_regenerates_slug() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(create_tag_handler)
                .service(update_tag_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/tags")
            .set_json(json!({ "title": "Postgres" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/tags/{id}"))
            .set_json(json!({ "title": "PostgreSQL", "type": "Data", "custom_colour": "#336791" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "postgresql");
        assert_eq!(body["data"]["custom_colour"], "#336791");
    }

    #[actix_web::test]
    async fn unknown_tag_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(update_tag_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/tags/{}", Uuid::now_v7()))
            .set_json(json!({ "title": "Ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
