//! HTML chat page
//!
//! Every state change is a form POST answered with a 303 back to the page,
//! so a refresh never resubmits a message.

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;
use serde::Deserialize;
use uuid::Uuid;

use crate::core::SessionError;
use crate::render;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ComposeForm {
    #[serde(default)]
    pub message: String,
}

fn chat_url(id: Uuid) -> String {
    format!("/chat/{id}")
}

fn not_found(err: SessionError) -> Response {
    let SessionError::NotFound(id) = err;
    tracing::debug!(session_id = %id, "Page requested for unknown session");
    (StatusCode::NOT_FOUND, Html(render::render_not_found(id))).into_response()
}

/// Start a fresh session and send the browser to it
pub async fn start(State(state): State<AppState>) -> Redirect {
    let id = state.sessions.create().await;
    Redirect::to(&chat_url(id))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.sessions.visible(id).await {
        Ok(messages) => Html(render::render_page(
            state.sessions.edition(),
            id,
            &messages,
            Local::now(),
        ))
        .into_response(),
        Err(err) => not_found(err),
    }
}

pub async fn send(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ComposeForm>,
) -> Response {
    if !state.sessions.contains(id).await {
        return not_found(SessionError::NotFound(id));
    }
    if !form.message.trim().is_empty() {
        super::think(&state).await;
        if let Err(err) = state.sessions.submit(id, &form.message).await {
            return not_found(err);
        }
    }
    Redirect::to(&chat_url(id)).into_response()
}

pub async fn clear(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.sessions.clear(id).await {
        Ok(()) => Redirect::to(&chat_url(id)).into_response(),
        Err(err) => not_found(err),
    }
}
