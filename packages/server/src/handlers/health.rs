use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::{instrument, warn};

use crate::state::AppState;

#[derive(Serialize, utoipa::ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to Event Management API")]
    pub message: &'static str,
    #[schema(example = "/swagger-ui")]
    pub docs: &'static str,
    #[schema(example = "/health")]
    pub health: &'static str,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: &'static str,
    /// Configured database name.
    #[schema(example = "event_management_db")]
    pub database: String,
    /// Whether the document store answered a ping.
    pub connected: bool,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    operation_id = "root",
    summary = "API entry point",
    responses((status = 200, description = "Welcome message with links", body = WelcomeResponse)),
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Event Management API",
        docs: "/swagger-ui",
        health: "/health",
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    operation_id = "health",
    summary = "Service health",
    description = "Always 200 while the process is serving. `connected` reports whether the \
        document store answered a ping.",
    responses((status = 200, description = "Health report", body = HealthResponse)),
)]
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Health check ping failed");
            false
        }
    };

    Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" },
        database: state.config.database.name.clone(),
        connected,
    })
}
