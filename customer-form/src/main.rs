//! Bootstrap: open the store, ensure the schema, mount common and page
//! routes.

use axum::Router;
use customer_form::{common_routes, page_routes, store, AppState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("customer_form=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".into());
    let pool = store::connect(&database_url).await?;
    store::ensure_schema(&pool).await?;
    let state = AppState { pool };

    let app = Router::new()
        .merge(common_routes())
        .merge(page_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("127.0.0.1:3001").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
