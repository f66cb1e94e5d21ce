//! Bootstrap: open the store, ensure the schema, mount common, todo, and
//! static-file routes.

use axum::http::{header, HeaderValue};
use axum::Router;
use todo_api::{common_routes, store, todo_routes, AppState};
use tokio::net::TcpListener;
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("todo_api=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".into());
    let pool = store::connect(&database_url).await?;
    store::ensure_schema(&pool).await?;
    let state = AppState { pool };

    let mut app = Router::new()
        .merge(common_routes())
        .merge(todo_routes(state))
        .fallback_service(ServeDir::new("static"))
        .layer(TraceLayer::new_for_http());

    // 30-day HSTS outside development; TLS termination is the proxy's job.
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        app = app.layer(SetResponseHeaderLayer::overriding(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=2592000"),
        ));
    }

    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
