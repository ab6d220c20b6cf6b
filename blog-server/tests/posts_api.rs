use actix_web::{
    http::{Method, StatusCode},
    test, web, App,
};
use async_trait::async_trait;
use blog_server::application::BlogService;
use blog_server::data::{InMemoryPostStore, PostStore};
use blog_server::domain::{DomainError, NewPost, Post};
use blog_server::presentation::{self, middleware::open_cors};
use serde_json::{json, Value};
use std::sync::Arc;

/// Store whose every call fails, as if the network to it were down.
struct UnreachableStore;

#[async_trait]
impl PostStore for UnreachableStore {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Err(DomainError::store("error sending request: connection refused"))
    }

    async fn insert(&self, _new_post: NewPost) -> Result<Post, DomainError> {
        Err(DomainError::store("error sending request: connection refused"))
    }
}

fn service_with(store: Arc<dyn PostStore>) -> web::Data<Arc<BlogService>> {
    web::Data::new(Arc::new(BlogService::new(store)))
}

macro_rules! init_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .wrap(open_cors())
                .app_data(service_with($store))
                .configure(presentation::routes),
        )
        .await
    };
}

#[actix_web::test]
async fn empty_store_lists_empty_array() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn create_then_list_returns_the_same_record() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({ "title": "Hello", "content": "World", "author": "Ada" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let raw: Value = test::read_body_json(resp).await;
    assert!(raw["id"].is_i64());
    assert!(raw["created_at"].is_string());
    let created: Post = serde_json::from_value(raw).unwrap();
    assert_eq!(created.title, "Hello");
    assert_eq!(created.content, "World");
    assert_eq!(created.author.as_deref(), Some("Ada"));

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let posts: Vec<Post> = test::read_body_json(resp).await;
    assert_eq!(posts, vec![created]);
}

#[actix_web::test]
async fn author_is_optional() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({ "title": "Untitled author", "content": "body" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Post = test::read_body_json(resp).await;
    assert_eq!(created.author, None);
}

#[actix_web::test]
async fn sequential_creates_get_distinct_ids() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    let mut ids = Vec::new();
    for title in ["first", "second"] {
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "title": title, "content": "body", "author": null }))
            .to_request();
        let created: Post = test::call_and_read_body_json(&app, req).await;
        ids.push(created.id);
    }
    assert_ne!(ids[0], ids[1]);

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    let listed: Vec<i64> = posts.iter().map(|p| p.id).collect();
    assert!(ids.iter().all(|id| listed.contains(id)));
}

#[actix_web::test]
async fn missing_required_field_is_a_store_failure() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    for body in [
        json!({ "content": "no title" }),
        json!({ "title": "no content" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());
    }
}

#[actix_web::test]
async fn list_failure_returns_only_the_error() {
    let app = init_app!(Arc::new(UnreachableStore));

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "error": "error sending request: connection refused" })
    );
}

#[actix_web::test]
async fn create_failure_returns_500() {
    let app = init_app!(Arc::new(UnreachableStore));

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({ "title": "Hello", "content": "World", "author": "Ada" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        json!("error sending request: connection refused")
    );
}

#[actix_web::test]
async fn unreadable_bodies_end_as_store_failures() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    let requests = [
        // Не JSON
        test::TestRequest::post()
            .uri("/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("not json"),
        // Поле не строка
        test::TestRequest::post()
            .uri("/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"title":123,"content":"x"}"#),
        // Валидный JSON без content-type читается как пустое тело
        test::TestRequest::post()
            .uri("/posts")
            .set_payload(r#"{"title":"Hello","content":"World"}"#),
    ];

    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert!(posts.is_empty());
}

#[actix_web::test]
async fn json_content_type_with_charset_is_accepted() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(("content-type", "application/json; charset=utf-8"))
        .set_payload(r#"{"title":"Hello","content":"World","author":"Ada"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn any_origin_is_allowed() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    let req = test::TestRequest::get()
        .uri("/posts")
        .insert_header(("origin", "http://somewhere.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let allowed = resp
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allowed, Some("http://somewhere.example"));
}

#[actix_web::test]
async fn preflight_allows_arbitrary_request_headers() {
    let app = init_app!(Arc::new(InMemoryPostStore::new()));

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/posts")
        .insert_header(("origin", "http://somewhere.example"))
        .insert_header(("access-control-request-method", "POST"))
        .insert_header((
            "access-control-request-headers",
            "content-type,x-requested-with",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let allowed_headers = resp
        .headers()
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_default();
    assert!(allowed_headers.contains("x-requested-with"));
    assert!(allowed_headers.contains("content-type"));
}
