use crate::application::BlogService;
use crate::domain::{DomainError, NewPost};
use actix_web::{
    http::{header, StatusCode},
    web, HttpRequest, HttpResponse, Responder,
};
use serde::Serialize;
use std::sync::Arc;

/// Body of every failed response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Ошибка хранилища уходит клиенту с исходным сообщением
fn error_to_response(err: DomainError) -> HttpResponse {
    let status = StatusCode::from_u16(err.to_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse {
        error: err.to_string(),
    })
}

fn is_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

pub async fn list_posts(blog_service: web::Data<Arc<BlogService>>) -> impl Responder {
    tracing::info!("Listing posts");

    match blog_service.list_posts().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => error_to_response(err),
    }
}

pub async fn create_post(
    req: HttpRequest,
    blog_service: web::Data<Arc<BlogService>>,
    body: web::Bytes,
) -> impl Responder {
    tracing::info!("Creating post");

    // Тело без JSON content-type читается как пустой объект
    let body: &[u8] = if is_json(&req) { &body } else { b"" };

    let new_post = match NewPost::from_body(body) {
        Ok(new_post) => new_post,
        Err(err) => {
            tracing::warn!("Create request rejected: {}", err);
            return error_to_response(err);
        }
    };

    match blog_service.create_post(new_post).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => error_to_response(err),
    }
}
