use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One vocabulary entry owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordRecord {
    pub id: Uuid,
    pub user_id: String,
    pub word: String,
    pub translation: String,
    pub example: Option<String>,
    pub learned: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewWord {
    pub word: String,
    pub translation: String,
    pub example: Option<String>,
}

/// Partial update; `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct WordPatch {
    pub word: Option<String>,
    pub translation: Option<String>,
    pub example: Option<String>,
}

impl WordPatch {
    pub(crate) fn apply(self, record: &mut WordRecord) {
        if let Some(word) = self.word {
            record.word = word;
        }
        if let Some(translation) = self.translation {
            record.translation = translation;
        }
        if let Some(example) = self.example {
            record.example = Some(example);
        }
    }
}
