use actix_web::{get, put, web, Responder};
use uuid::Uuid;

use super::dto::RepositoryRequest;
use crate::modules::project::application::domain::entities::RepoTarget;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/{project_id}/repositories")]
pub async fn get_project_repositories_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_repositories.list(path.into_inner()).await {
        Ok(repositories) => ApiResponse::success(repositories),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[get("/api/projects/{project_id}/repositories/{repo_id}")]
pub async fn get_project_repository_handler(
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (project_id, repo_id) = path.into_inner();

    match data.project.get_repositories.get(project_id, repo_id).await {
        Ok(repository) => ApiResponse::success(repository),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[put("/api/projects/{project_id}/repositories")]
pub async fn sync_project_repositories_handler(
    path: web::Path<Uuid>,
    req: web::Json<Vec<RepositoryRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let targets = req.into_inner().into_iter().map(RepoTarget::from).collect();

    match data
        .project
        .sync_repositories
        .execute(path.into_inner(), targets)
        .await
    {
        Ok(repositories) => ApiResponse::success(repositories),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::project::adapter::incoming::web::routes::create_project_handler;
    use crate::modules::project::application::ports::outgoing::REPOSITORY_NOT_FOUND;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn sync_drops_unlisted_and_adds_new() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(create_project_handler)
                .service(get_project_repositories_handler)
                .service(get_project_repository_handler)
                .service(sync_project_repositories_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({
                "title": "Atlas",
                "year": 2024,
                "repositories": [
                    { "title": "api", "url": "https://github.com/acme/api", "order": 1 },
                    { "title": "web", "url": "https://github.com/acme/web", "order": 2 }
                ]
            }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();
        let api = created["data"]["repositories"][0].clone();
        let web_id = created["data"]["repositories"][1]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{id}/repositories"))
            .set_json(json!([
                { "id": api["id"], "order": 3 },
                { "title": "cli", "url": "https://github.com/acme/cli", "order": 1 }
            ]))
            .to_request();
        let synced: Value = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<&str> = synced["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["cli", "api"]);

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/{id}/repositories/{web_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], REPOSITORY_NOT_FOUND);

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/{id}/repositories"))
            .to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn new_repository_without_url_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(create_project_handler)
                .service(sync_project_repositories_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({ "title": "Atlas", "year": 2024 }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{id}/repositories"))
            .set_json(json!([{ "title": "api" }]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
