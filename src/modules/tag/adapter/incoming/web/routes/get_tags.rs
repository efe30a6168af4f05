use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::dto::SearchQuery;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/tags")]
pub async fn get_tags_handler(
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tag.get_list.execute(query.into_inner().search).await {
        Ok(tags) => ApiResponse::success(tags),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[get("/api/tags/{tag_id}")]
pub async fn get_tag_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tag.get_single.by_id(path.into_inner()).await {
        Ok(tag) => ApiResponse::success(tag),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[get("/api/tags/slug/{slug}")]
pub async fn get_tag_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tag.get_single.by_slug(&path.into_inner()).await {
        Ok(tag) => ApiResponse::success(tag),
        Err(e) => ApiResponse::failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::infrastructure::memory_store::MemoryStore;
    use crate::modules::tag::application::domain::entities::{Tag, TagType};
    use crate::modules::tag::application::ports::incoming::use_cases::GetTagsUseCase;
    use crate::modules::tag::application::ports::outgoing::{TagRepository, TAG_NOT_FOUND};
    use crate::shared::outcome::{Failure, Outcome};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct BrokenTags;

    #[async_trait]
    impl GetTagsUseCase for BrokenTags {
        async fn execute(&self, _search: Option<String>) -> Outcome<Vec<Tag>> {
            Err(Failure::internal("relation \"tags\" does not exist"))
        }
    }

    fn tag(title: &str, slug: &str) -> Tag {
        Tag {
            id: Uuid::now_v7(),
            title: title.into(),
            tag_type: TagType::Frontend,
            icon: Some("vue.svg".into()),
            custom_colour: None,
            slug: slug.into(),
        }
    }

    #[actix_web::test]
    async fn lists_searches_and_fetches_tags() {
        let store = MemoryStore::default();
        let vue = store.create_tag(tag("Vue", "vue")).await.unwrap();
        store.create_tag(tag("Nuxt", "nuxt")).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_store(store).build())
                .service(get_tag_by_slug_handler)
                .service(get_tags_handler)
                .service(get_tag_by_id_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/tags").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::get().uri("/api/tags?search=VU").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["type"], "Frontend");

        let req = test::TestRequest::get()
            .uri(&format!("/api/tags/{}", vue.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["slug"], "vue");

        let req = test::TestRequest::get().uri("/api/tags/slug/nuxt").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "Nuxt");
    }

    #[actix_web::test]
    async fn missing_tag_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_tag_by_id_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/tags/{}", Uuid::now_v7()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], TAG_NOT_FOUND);
    }

    #[actix_web::test]
    async fn storage_fault_is_500() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_get_tags(BrokenTags).build())
                .service(get_tags_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/tags").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
