use actix_web::{post, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/slugs/backfill")]
pub async fn backfill_slugs_handler(data: web::Data<AppState>) -> impl Responder {
    match data.maintenance.backfill_slugs.execute().await {
        Ok(report) => ApiResponse::success(report),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;
    use uuid::Uuid;

    use crate::infrastructure::memory_store::MemoryStore;
    use crate::modules::tag::application::domain::entities::{Tag, TagType};
    use crate::modules::tag::application::ports::outgoing::TagRepository;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn reports_filled_slugs() {
        let store = MemoryStore::default();
        store
            .create_tag(Tag {
                id: Uuid::now_v7(),
                title: "Tailwind CSS".into(),
                tag_type: TagType::Frontend,
                icon: None,
                custom_colour: None,
                slug: String::new(),
            })
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_store(store).build())
                .service(backfill_slugs_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/slugs/backfill")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["tags"], 1);
        assert_eq!(body["data"]["companies"], 0);
        assert_eq!(body["data"]["projects"], 0);
    }
}
