//! Bootstrap: open the store, ensure the schema, mount common and page
//! routes.

use axum::http::{header, HeaderValue};
use axum::Router;
use movie_catalog::{common_routes, page_routes, store, AppState};
use tokio::net::TcpListener;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("movie_catalog=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:movies.db?mode=rwc".into());
    let pool = store::connect(&database_url).await?;
    store::ensure_schema(&pool).await?;
    let state = AppState { pool };

    let mut app = Router::new()
        .merge(common_routes())
        .merge(page_routes(state))
        .layer(TraceLayer::new_for_http());

    // 30-day HSTS outside development; TLS termination is the proxy's job.
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        app = app.layer(SetResponseHeaderLayer::overriding(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=2592000"),
        ));
    }

    let listener = TcpListener::bind("127.0.0.1:3002").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
