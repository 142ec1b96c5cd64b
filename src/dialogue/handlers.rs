use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{
    dto::{DialogueRequest, DialogueResponse, SaveSessionRequest, SaveSessionResponse},
    repo_types::{DialogueSession, SessionSummary},
};
use crate::{error::ApiError, extract::ApiJson, state::AppState};

pub fn dialogue_routes() -> Router<AppState> {
    Router::new().route("/dialogue", post(chat))
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/dialogue-session", post(save_session))
        .route("/dialogue-session/:session_id", get(get_session))
        .route("/dialogue-sessions/:user_id", get(list_sessions))
}

#[instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DialogueRequest>,
) -> Result<Json<DialogueResponse>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".into()));
    }
    let reply = state.tutor.reply(&payload.message, &payload.user_id).await?;
    debug!(user_id = %payload.user_id, "tutor replied");
    Ok(Json(reply.into()))
}

#[instrument(skip(state, payload))]
pub async fn save_session(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SaveSessionRequest>,
) -> Result<Json<SaveSessionResponse>, ApiError> {
    let session = state.sessions.save(payload.into())?;
    info!(
        session_id = %session.session_id,
        user_id = %session.user_id,
        messages = session.messages.len(),
        "dialogue session saved"
    );
    Ok(Json(SaveSessionResponse {
        session_id: session.session_id,
        status: "saved".into(),
    }))
}

#[instrument(skip(state))]
pub async fn list_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<SessionSummary>> {
    Json(state.sessions.list_for_user(&user_id))
}

#[instrument(skip(state))]
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<DialogueSession>, ApiError> {
    let id = Uuid::parse_str(&session_id).map_err(|_| ApiError::NotFound("Session"))?;
    Ok(Json(state.sessions.get(id)?))
}
