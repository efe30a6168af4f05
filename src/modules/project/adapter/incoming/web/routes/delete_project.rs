use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/projects/{project_id}")]
pub async fn delete_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.delete.execute(path.into_inner()).await {
        Ok(_) => ApiResponse::no_content(),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::project::adapter::incoming::web::routes::create_project_handler;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::upload_json;
    use crate::tests::support::media_doubles::InMemoryFileStorage;

    #[actix_web::test]
    async fn delete_releases_files_then_404s() {
        let files = InMemoryFileStorage::default();
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_files(files.clone()).build())
                .service(create_project_handler)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({
                "title": "Atlas",
                "year": 2024,
                "images": [{ "type": "Banner", "file": upload_json("b.png", b"banner") }]
            }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(files.len(), 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/projects/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(files.len(), 0);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/projects/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
