use actix_web::{post, web, Responder};

use super::dto::CompanyRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/companies")]
pub async fn create_company_handler(
    req: web::Json<CompanyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::failure(&e),
    };

    match data.company.create.execute(draft).await {
        Ok(company) => ApiResponse::created(company),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::upload_json;
    use crate::tests::support::media_doubles::InMemoryFileStorage;

    #[actix_web::test]
    async fn creates_company_with_logo() {
        let files = InMemoryFileStorage::default();
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_files(files.clone()).build())
                .service(create_company_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/companies")
            .set_json(json!({
                "name": "Acme Corp",
                "description": "Rockets",
                "website": "https://acme.example",
                "logo": upload_json("acme.svg", b"<svg/>")
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "acme-corp");
        let logo = body["data"]["logo"].as_str().unwrap();
        assert_eq!(files.get(logo), Some(b"<svg/>".to_vec()));
    }

    #[actix_web::test]
    async fn duplicate_name_is_409() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(create_company_handler),
        )
        .await;

        for (name, expected) in [("Acme", StatusCode::CREATED), ("ACME", StatusCode::CONFLICT)] {
            let req = test::TestRequest::post()
                .uri("/api/companies")
                .set_json(json!({ "name": name }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn unstorable_logo_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_files(InMemoryFileStorage::failing_saves())
                        .build(),
                )
                .service(create_company_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/companies")
            .set_json(json!({ "name": "Acme", "logo": upload_json("a.png", b"png") }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
