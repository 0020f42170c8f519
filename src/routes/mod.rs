//! HTTP routes: JSON API, health check, and the HTML chat page

mod pages;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Edition;
use crate::conversation::Message;
use crate::core::{Exchange, SessionError};
use crate::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    edition: Edition,
    sessions: usize,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Errors surfaced by the JSON API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Session(SessionError::NotFound(_)) => StatusCode::NOT_FOUND,
        };
        tracing::warn!(%status, error = %self, "Request failed");

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        edition: state.config.edition,
        sessions: state.sessions.len().await,
    })
}

async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let id = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            id,
            messages: Vec::new(),
        }),
    )
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let messages = state.sessions.visible(id).await?;
    Ok(Json(SessionResponse { id, messages }))
}

async fn submit_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<Exchange>, ApiError> {
    if !state.sessions.contains(id).await {
        return Err(SessionError::NotFound(id).into());
    }
    think(&state).await;
    let exchange = state.sessions.submit(id, &request.message).await?;
    Ok(Json(exchange))
}

async fn clear_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.clear(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The artificial pause before a reply is produced
pub(crate) async fn think(state: &AppState) {
    let delay = state.config.reply_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(pages::start))
        .route("/chat/:id", get(pages::show).post(pages::send))
        .route("/chat/:id/clear", post(pages::clear))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(end_session))
        .route("/api/sessions/:id/messages", post(submit_message))
        .route("/api/sessions/:id/clear", post(clear_session))
}
