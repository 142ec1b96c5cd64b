use std::collections::{BTreeSet, HashMap};

use parking_lot::RwLock;
use time::{Date, UtcOffset};
use uuid::Uuid;

use super::repo_types::{DialogueSession, NewSession, SessionSummary};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    by_user: HashMap<String, Vec<DialogueSession>>,
    owners: HashMap<Uuid, String>,
}

/// Saved tutor conversations, partitioned by user in save order.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Inner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, new: NewSession) -> Result<DialogueSession, StoreError> {
        if new.user_id.trim().is_empty() {
            return Err(StoreError::Validation("user_id must not be empty".into()));
        }
        if new.ended_at < new.started_at {
            return Err(StoreError::Validation(
                "ended_at must not precede started_at".into(),
            ));
        }

        let mut inner = self.inner.write();
        let session_id = loop {
            let id = Uuid::new_v4();
            if !inner.owners.contains_key(&id) {
                break id;
            }
        };
        let session = DialogueSession {
            session_id,
            user_id: new.user_id,
            messages: new.messages,
            started_at: new.started_at,
            ended_at: new.ended_at,
        };
        inner.owners.insert(session_id, session.user_id.clone());
        inner
            .by_user
            .entry(session.user_id.clone())
            .or_default()
            .push(session.clone());
        Ok(session)
    }

    pub fn list_for_user(&self, user_id: &str) -> Vec<SessionSummary> {
        let inner = self.inner.read();
        inner
            .by_user
            .get(user_id)
            .map(|sessions| sessions.iter().map(SessionSummary::from).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, session_id: Uuid) -> Result<DialogueSession, StoreError> {
        let inner = self.inner.read();
        inner
            .owners
            .get(&session_id)
            .and_then(|owner| inner.by_user.get(owner))
            .and_then(|sessions| sessions.iter().find(|s| s.session_id == session_id))
            .cloned()
            .ok_or(StoreError::NotFound("Session"))
    }

    pub fn count_for_user(&self, user_id: &str) -> usize {
        self.inner
            .read()
            .by_user
            .get(user_id)
            .map_or(0, Vec::len)
    }

    /// UTC days on which the user started a session.
    pub fn activity_dates(&self, user_id: &str) -> BTreeSet<Date> {
        let inner = self.inner.read();
        inner
            .by_user
            .get(user_id)
            .map(|sessions| {
                sessions
                    .iter()
                    .map(|s| s.started_at.to_offset(UtcOffset::UTC).date())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::dialogue::repo_types::{Message, Sender};

    fn session(user: &str) -> NewSession {
        NewSession {
            user_id: user.into(),
            messages: vec![
                Message {
                    id: "1".into(),
                    text: "Bonjour! Comment allez-vous?".into(),
                    sender: Sender::Ai,
                    timestamp: datetime!(2026-03-01 09:00 UTC),
                },
                Message {
                    id: "2".into(),
                    text: "Très bien, merci.".into(),
                    sender: Sender::User,
                    timestamp: datetime!(2026-03-01 09:01 UTC),
                },
            ],
            started_at: datetime!(2026-03-01 09:00 UTC),
            ended_at: datetime!(2026-03-01 09:05 UTC),
        }
    }

    #[test]
    fn saved_sessions_are_listed_in_order() {
        let store = SessionStore::new();
        let first = store.save(session("alice")).unwrap();
        store.save(session("bob")).unwrap();
        let second = store.save(session("alice")).unwrap();

        let listed = store.list_for_user("alice");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].session_id, first.session_id);
        assert_eq!(listed[1].session_id, second.session_id);
        assert_eq!(listed[0].message_count, 2);
        assert_eq!(store.count_for_user("alice"), 2);
        assert_eq!(store.count_for_user("nobody"), 0);
        assert!(store.list_for_user("nobody").is_empty());
    }

    #[test]
    fn get_returns_full_session_or_not_found() {
        let store = SessionStore::new();
        let saved = store.save(session("alice")).unwrap();
        assert_eq!(store.get(saved.session_id).unwrap(), saved);
        assert_eq!(
            store.get(Uuid::new_v4()),
            Err(StoreError::NotFound("Session"))
        );
    }

    #[test]
    fn save_rejects_inverted_time_range_and_blank_user() {
        let store = SessionStore::new();
        let mut bad = session("alice");
        bad.ended_at = datetime!(2026-03-01 08:00 UTC);
        assert!(matches!(store.save(bad), Err(StoreError::Validation(_))));
        assert!(matches!(store.save(session("")), Err(StoreError::Validation(_))));
        assert_eq!(store.count_for_user("alice"), 0);
    }

    #[test]
    fn activity_dates_use_utc_start_day() {
        let store = SessionStore::new();
        let mut late = session("alice");
        late.started_at = datetime!(2026-03-02 00:30 +02:00);
        late.ended_at = datetime!(2026-03-02 01:00 +02:00);
        store.save(late).unwrap();
        let dates: Vec<Date> = store.activity_dates("alice").into_iter().collect();
        assert_eq!(dates, vec![time::macros::date!(2026 - 03 - 01)]);
    }
}
