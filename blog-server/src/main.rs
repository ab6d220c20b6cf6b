use dotenvy::dotenv;
use std::sync::Arc;

use blog_server::application::BlogService;
use blog_server::infrastructure::{
    config::ServerConfig, database::open_store, logging::init_logging,
};
use blog_server::presentation::{self, middleware::open_cors};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    init_logging();

    let config = ServerConfig::from_env()?;
    let http_addr = config.bind_addr();

    tracing::info!("Starting blog server...");
    tracing::info!("Post store backend: {}", config.store.backend_name());

    let store = open_store(&config.store).await?;
    let blog_service = Arc::new(BlogService::new(store));

    let result = run_http_server(http_addr, blog_service.clone()).await;

    tracing::info!("Shutting down...");
    blog_service.shutdown().await;

    result
}

async fn run_http_server(addr: String, blog_service: Arc<BlogService>) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(open_cors())
            .app_data(web::Data::new(blog_service.clone()))
            .configure(presentation::routes)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
