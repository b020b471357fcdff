use super::shutdown_signal;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use sourcewatch_api::{create_api_routes, AppState};
use sourcewatch_domain::config::ServerConfig;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    config: &ServerConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;

    let app = create_app(state, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(bind_address = %addr, "API server listening");
    info!("   Sources: http://{}/api/sources", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("API server shut down gracefully");
    Ok(())
}

fn create_app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
