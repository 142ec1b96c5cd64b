use std::collections::{BTreeSet, HashMap};

use parking_lot::RwLock;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::repo_types::{NewWord, WordPatch, WordRecord};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    /// Per-user records in insertion order.
    by_user: HashMap<String, Vec<WordRecord>>,
    /// word id -> owning user id.
    owners: HashMap<Uuid, String>,
}

impl Inner {
    fn find(&self, id: Uuid) -> Option<&WordRecord> {
        let owner = self.owners.get(&id)?;
        self.by_user.get(owner)?.iter().find(|w| w.id == id)
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut WordRecord> {
        let owner = self.owners.get(&id)?;
        self.by_user.get_mut(owner)?.iter_mut().find(|w| w.id == id)
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.owners.contains_key(&id) {
                return id;
            }
        }
    }
}

/// In-memory vocabulary, partitioned by owning user.
///
/// A single lock guards both the partitions and the id index, so every
/// operation observes and leaves them consistent.
#[derive(Debug, Default)]
pub struct WordStore {
    inner: RwLock<Inner>,
}

fn require_text(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records owned by `user_id`, oldest first. Unknown users get an empty list.
    pub fn list_for_user(&self, user_id: &str) -> Vec<WordRecord> {
        self.inner
            .read()
            .by_user
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get(&self, id: Uuid) -> Result<WordRecord, StoreError> {
        self.inner
            .read()
            .find(id)
            .cloned()
            .ok_or(StoreError::NotFound("Word"))
    }

    pub fn create(&self, user_id: &str, new: NewWord) -> Result<WordRecord, StoreError> {
        require_text("user_id", user_id)?;
        require_text("word", &new.word)?;
        require_text("translation", &new.translation)?;

        let mut inner = self.inner.write();
        let record = WordRecord {
            id: inner.fresh_id(),
            user_id: user_id.to_string(),
            word: new.word,
            translation: new.translation,
            example: new.example,
            learned: false,
            created_at: OffsetDateTime::now_utc(),
        };
        inner.owners.insert(record.id, record.user_id.clone());
        inner
            .by_user
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    /// Applies the fields present in `patch`. Identity, owner and creation
    /// time are never touched.
    pub fn update(&self, id: Uuid, patch: WordPatch) -> Result<WordRecord, StoreError> {
        if let Some(word) = &patch.word {
            require_text("word", word)?;
        }
        if let Some(translation) = &patch.translation {
            require_text("translation", translation)?;
        }

        let mut inner = self.inner.write();
        let record = inner.find_mut(id).ok_or(StoreError::NotFound("Word"))?;
        patch.apply(record);
        Ok(record.clone())
    }

    /// One-way flip; calling it on an already learned word is a no-op.
    pub fn mark_learned(&self, id: Uuid) -> Result<WordRecord, StoreError> {
        let mut inner = self.inner.write();
        let record = inner.find_mut(id).ok_or(StoreError::NotFound("Word"))?;
        record.learned = true;
        Ok(record.clone())
    }

    pub fn delete(&self, id: Uuid) -> Result<WordRecord, StoreError> {
        let mut inner = self.inner.write();
        let owner = inner
            .owners
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("Word"))?;
        let words = inner
            .by_user
            .get_mut(&owner)
            .ok_or(StoreError::NotFound("Word"))?;
        let pos = words
            .iter()
            .position(|w| w.id == id)
            .ok_or(StoreError::NotFound("Word"))?;
        let removed = words.remove(pos);
        if words.is_empty() {
            inner.by_user.remove(&owner);
        }
        inner.owners.remove(&id);
        Ok(removed)
    }

    /// `(total, learned)` for one user.
    pub fn stats_for_user(&self, user_id: &str) -> (usize, usize) {
        let inner = self.inner.read();
        match inner.by_user.get(user_id) {
            Some(words) => (words.len(), words.iter().filter(|w| w.learned).count()),
            None => (0, 0),
        }
    }

    /// UTC days on which the user added at least one word.
    pub fn activity_dates(&self, user_id: &str) -> BTreeSet<Date> {
        let inner = self.inner.read();
        inner
            .by_user
            .get(user_id)
            .map(|words| {
                words
                    .iter()
                    .map(|w| w.created_at.to_offset(time::UtcOffset::UTC).date())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of records across all users.
    pub fn record_count(&self) -> usize {
        self.inner.read().owners.len()
    }
}
