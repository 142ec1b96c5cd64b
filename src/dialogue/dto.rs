use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{Message, NewSession};
use super::services::TutorReply;

#[derive(Debug, Deserialize)]
pub struct DialogueRequest {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DialogueResponse {
    pub response: String,
    #[serde(default)]
    pub suggested_words: Vec<String>,
}

impl From<TutorReply> for DialogueResponse {
    fn from(r: TutorReply) -> Self {
        Self {
            response: r.response,
            suggested_words: r.suggested_words,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveSessionRequest {
    pub user_id: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
}

impl From<SaveSessionRequest> for NewSession {
    fn from(r: SaveSessionRequest) -> Self {
        Self {
            user_id: r.user_id,
            messages: r.messages,
            started_at: r.started_at,
            ended_at: r.ended_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveSessionResponse {
    pub session_id: Uuid,
    pub status: String,
}
