pub mod http_handlers;
pub mod middleware;

use actix_web::web;

/// Register the `/posts` routes. Expects `web::Data<Arc<BlogService>>` to be
/// present on the app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/posts")
            .route(web::get().to(http_handlers::list_posts))
            .route(web::post().to(http_handlers::create_post)),
    );
}
