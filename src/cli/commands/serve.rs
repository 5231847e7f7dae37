//! HTTP API server for the weather agent.
//!
//! The agent never surfaces errors as HTTP status codes: upstream failures
//! become fixed reply strings and the chat endpoint always answers 200,
//! chat-style.

use crate::agent::WeatherAgent;
use crate::cli::Output;
use crate::config::Settings;
use axum::{
    extract::State,
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Shared application state.
struct AppState {
    agent: WeatherAgent,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let origin: HeaderValue = settings.server.allowed_origin.parse()?;
    let agent = WeatherAgent::from_settings(settings)?;

    let state = Arc::new(AppState { agent });

    // A single allowed origin with credentials; methods and headers are
    // mirrored because tower-http rejects wildcards alongside credentials.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(status))
        .route("/chat", post(chat))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("WeatherMind API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Status", "GET  /");
    Output::kv("Chat", "POST /chat");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
}

// === Handlers ===

async fn status() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "WeatherMind API running" }))
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let reply = state.agent.run(&req.message).await;
    Json(ChatResponse { reply })
}
