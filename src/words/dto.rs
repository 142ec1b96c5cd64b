use serde::{Deserialize, Serialize};

use super::repo_types::{NewWord, WordPatch};

#[derive(Debug, Deserialize)]
pub struct CreateWordRequest {
    pub word: String,
    pub translation: String,
    #[serde(default)]
    pub example: Option<String>,
    /// Accepted when the query string does not carry one.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl From<CreateWordRequest> for NewWord {
    fn from(r: CreateWordRequest) -> Self {
        Self {
            word: r.word,
            translation: r.translation,
            example: r.example,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateWordRequest {
    pub word: Option<String>,
    pub translation: Option<String>,
    pub example: Option<String>,
}

impl From<UpdateWordRequest> for WordPatch {
    fn from(r: UpdateWordRequest) -> Self {
        Self {
            word: r.word,
            translation: r.translation,
            example: r.example,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
