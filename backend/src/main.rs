//! GrowMore Farmer Gateway - Backend Server
//!
//! HTTP gateway in front of the farmer record service and the remote
//! problem service: fixed routes, fixed statuses, and a `desc` header
//! on every successful response.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

use external::ProblemServiceClient;
use services::{FarmerService, InMemoryFarmerService, ProblemClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub farmers: Arc<dyn FarmerService>,
    pub problems: Arc<dyn ProblemClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmer_api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Farmer Gateway Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Problem service at {}", config.problem_service.base_url);

    // Create application state
    let state = AppState {
        farmers: Arc::new(InMemoryFarmerService::new()),
        problems: Arc::new(ProblemServiceClient::new(
            config.problem_service.base_url.clone(),
        )),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/farmer-api", routes::farmer_api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "GrowMore Farmer Gateway API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
