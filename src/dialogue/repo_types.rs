use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Ai,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A finished tutor conversation as saved by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialogueSession {
    pub session_id: Uuid,
    pub user_id: String,
    pub messages: Vec<Message>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
    pub message_count: usize,
}

impl From<&DialogueSession> for SessionSummary {
    fn from(s: &DialogueSession) -> Self {
        Self {
            session_id: s.session_id,
            started_at: s.started_at,
            ended_at: s.ended_at,
            message_count: s.messages.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: String,
    pub messages: Vec<Message>,
    pub started_at: OffsetDateTime,
    pub ended_at: OffsetDateTime,
}
