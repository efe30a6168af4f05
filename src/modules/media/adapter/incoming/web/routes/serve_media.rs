use actix_web::{get, http::header, web, HttpResponse, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Streams an uploaded file back with a content type taken from its name.
#[get("/api/media/uploads/{file_name}")]
pub async fn serve_media_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.media.get.execute(&path.into_inner()).await {
        Ok(file) => HttpResponse::Ok()
            .content_type(file.content_type)
            .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
            .body(file.bytes),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::media_doubles::InMemoryFileStorage;

    #[actix_web::test]
    async fn serves_stored_file_with_content_type() {
        let files = InMemoryFileStorage::default();
        files.insert("logo.png", b"\x89PNG");

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_files(files).build())
                .service(serve_media_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/media/uploads/logo.png")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"\x89PNG");
    }

    #[actix_web::test]
    async fn missing_file_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(serve_media_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/media/uploads/nope.png")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
