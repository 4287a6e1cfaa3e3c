use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use xmpp_srv_check_api::{create_api_routes, AppState};

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        api_url = %format!("http://{}/api", bind_addr),
        "Starting web server"
    );

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
