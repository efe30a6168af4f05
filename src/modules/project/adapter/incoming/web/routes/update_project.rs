use actix_web::{put, web, Responder};
use uuid::Uuid;

use super::dto::ProjectRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full replacement: omitted relation lists are cleared.
#[put("/api/projects/{project_id}")]
pub async fn update_project_handler(
    path: web::Path<Uuid>,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(e) => return ApiResponse::failure(&e),
    };

    match data.project.update.execute(path.into_inner(), command).await {
        Ok(view) => ApiResponse::success(view),
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
    async fn replaces_logo_and_keeps_listed_images() {
        let files = InMemoryFileStorage::default();
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_files(files.clone()).build())
                .service(create_project_handler)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({
                "title": "Atlas",
                "year": 2024,
                "images": [
                    { "type": "Logo", "file": upload_json("v1.png", b"one") },
                    { "type": "Desktop", "file": upload_json("home.png", b"home") }
                ]
            }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();
        let desktop = created["data"]["images"][1].clone();
        let old_logo = created["data"]["images"][0]["image"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{id}"))
            .set_json(json!({
                "title": "Atlas Reloaded",
                "year": 2025,
                "images": [
                    { "id": desktop["id"], "type": "Desktop", "order": 4 },
                    { "type": "Logo", "file": upload_json("v2.png", b"two") }
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let images = body["data"]["images"].as_array().unwrap();
        assert_eq!(body["data"]["slug"], "atlas-reloaded");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0]["type"], "Logo");
        assert_eq!(images[1]["id"], desktop["id"]);
        assert_eq!(images[1]["order"], 4);
        assert!(!files.contains(&old_logo));
        assert_eq!(files.len(), 2);
    }

    #[actix_web::test]
    async fn unknown_project_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{}", Uuid::now_v7()))
            .set_json(json!({ "title": "Ghost", "year": 2020 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
