pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::extract::DefaultBodyLimit;
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = shared::config::initialize(shared::config::load_config()?)?;

    shared::data::db::initialize_database(&shared::config::get_database_path(config))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    system::auth::jwt::initialize(config.auth.jwt_secret.as_deref())?;

    system::initialization::ensure_admin_user_exists(shared::data::db::get_connection()).await?;

    let uploads_dir = shared::config::get_uploads_dir(config);
    std::fs::create_dir_all(&uploads_dir)?;
    tracing::info!("Serving uploads from {}", uploads_dir.display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // Multipart framing and text parts on top of the largest accepted image
    let body_limit = config.uploads.max_image_bytes + 1024 * 1024;

    let app = Router::new()
        // System auth routes
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // Products
        .route(
            "/api/products",
            get(handlers::a001_product::list_all)
                .post(handlers::a001_product::create)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/health", get(|| async { "ok" }))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
