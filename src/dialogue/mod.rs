mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use repo::SessionStore;
pub use services::{CannedTutor, TutorClient};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::dialogue_routes())
        .merge(handlers::session_routes())
}
