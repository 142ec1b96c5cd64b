use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;

use super::{dto::UserProgress, services::user_progress};
use crate::state::AppState;

pub fn progress_routes() -> Router<AppState> {
    Router::new().route("/user/:user_id/progress", get(get_progress))
}

#[instrument(skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UserProgress> {
    let today = OffsetDateTime::now_utc().date();
    Json(user_progress(&state.words, &state.sessions, &user_id, today))
}
