use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::{CreateWordRequest, MessageResponse, OwnerQuery, UpdateWordRequest},
    repo_types::WordRecord,
};
use crate::{error::ApiError, extract::ApiJson, state::AppState};

pub fn word_routes() -> Router<AppState> {
    Router::new()
        .route("/words", post(create_word))
        // `:id` is the owner for GET and the word for PUT/DELETE.
        .route("/words/:id", get(list_words).put(update_word).delete(delete_word))
        .route("/words/:id/learned", put(mark_learned))
}

/// A path segment that is not a UUID cannot name any word.
fn parse_word_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("Word"))
}

#[instrument(skip(state))]
pub async fn list_words(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<WordRecord>> {
    Json(state.words.list_for_user(&user_id))
}

#[instrument(skip(state, payload))]
pub async fn create_word(
    State(state): State<AppState>,
    Query(q): Query<OwnerQuery>,
    ApiJson(mut payload): ApiJson<CreateWordRequest>,
) -> Result<Json<WordRecord>, ApiError> {
    let Some(user_id) = q.user_id.or_else(|| payload.user_id.take()) else {
        warn!("create word without user_id");
        return Err(ApiError::BadRequest("user_id is required".into()));
    };

    let record = state.words.create(&user_id, payload.into())?;
    info!(word_id = %record.id, user_id = %record.user_id, "word created");
    Ok(Json(record))
}

#[instrument(skip(state, payload))]
pub async fn update_word(
    State(state): State<AppState>,
    Path(word_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateWordRequest>,
) -> Result<Json<WordRecord>, ApiError> {
    let id = parse_word_id(&word_id)?;
    let record = state.words.update(id, payload.into())?;
    info!(word_id = %record.id, "word updated");
    Ok(Json(record))
}

#[instrument(skip(state))]
pub async fn mark_learned(
    State(state): State<AppState>,
    Path(word_id): Path<String>,
) -> Result<Json<WordRecord>, ApiError> {
    let id = parse_word_id(&word_id)?;
    let record = state.words.mark_learned(id)?;
    info!(word_id = %record.id, "word marked learned");
    Ok(Json(record))
}

#[instrument(skip(state))]
pub async fn delete_word(
    State(state): State<AppState>,
    Path(word_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_word_id(&word_id)?;
    let removed = state.words.delete(id)?;
    info!(
        word_id = %removed.id,
        user_id = %removed.user_id,
        remaining = state.words.record_count(),
        "word deleted"
    );
    Ok(Json(MessageResponse {
        message: "Word deleted successfully".into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_uuid_path_is_not_found() {
        let err = parse_word_id("not-a-uuid").unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
        let id = Uuid::new_v4();
        assert_eq!(parse_word_id(&id.to_string()).unwrap(), id);
    }
}
