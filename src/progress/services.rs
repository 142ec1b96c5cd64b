use std::collections::BTreeSet;

use time::Date;

use super::dto::UserProgress;
use crate::{dialogue::SessionStore, words::WordStore};

/// Consecutive active days ending `today`, or ending yesterday when nothing
/// has happened yet today.
pub fn streak_days(active: &BTreeSet<Date>, today: Date) -> u32 {
    let mut day = if active.contains(&today) {
        today
    } else {
        match today.previous_day() {
            Some(d) if active.contains(&d) => d,
            _ => return 0,
        }
    };

    let mut streak = 1;
    while let Some(prev) = day.previous_day() {
        if !active.contains(&prev) {
            break;
        }
        streak += 1;
        day = prev;
    }
    streak
}

pub fn user_progress(
    words: &WordStore,
    sessions: &SessionStore,
    user_id: &str,
    today: Date,
) -> UserProgress {
    let (total_words, learned_words) = words.stats_for_user(user_id);
    let mut active = words.activity_dates(user_id);
    active.extend(sessions.activity_dates(user_id));

    UserProgress {
        total_words,
        learned_words,
        dialogue_sessions: sessions.count_for_user(user_id),
        streak_days: streak_days(&active, today),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;
    use crate::{dialogue::repo_types::NewSession, words::repo_types::NewWord};

    fn days(list: &[Date]) -> BTreeSet<Date> {
        list.iter().copied().collect()
    }

    #[test]
    fn no_activity_means_no_streak() {
        assert_eq!(streak_days(&BTreeSet::new(), date!(2026 - 03 - 10)), 0);
    }

    #[test]
    fn streak_counts_back_from_today() {
        let active = days(&[
            date!(2026 - 03 - 05),
            date!(2026 - 03 - 08),
            date!(2026 - 03 - 09),
            date!(2026 - 03 - 10),
        ]);
        assert_eq!(streak_days(&active, date!(2026 - 03 - 10)), 3);
    }

    #[test]
    fn streak_survives_until_today_is_missed() {
        let active = days(&[date!(2026 - 02 - 28), date!(2026 - 03 - 01)]);
        assert_eq!(streak_days(&active, date!(2026 - 03 - 02)), 2);
        assert_eq!(streak_days(&active, date!(2026 - 03 - 03)), 0);
    }

    #[test]
    fn unknown_user_has_zero_progress() {
        let words = WordStore::new();
        let sessions = SessionStore::new();
        let progress = user_progress(&words, &sessions, "ghost", date!(2026 - 03 - 10));
        assert_eq!(
            progress,
            UserProgress {
                total_words: 0,
                learned_words: 0,
                dialogue_sessions: 0,
                streak_days: 0,
            }
        );
    }

    #[test]
    fn progress_combines_words_and_sessions() {
        let words = WordStore::new();
        let sessions = SessionStore::new();
        let w = words
            .create(
                "alice",
                NewWord {
                    word: "chat".into(),
                    translation: "cat".into(),
                    example: None,
                },
            )
            .unwrap();
        words
            .create(
                "alice",
                NewWord {
                    word: "chien".into(),
                    translation: "dog".into(),
                    example: None,
                },
            )
            .unwrap();
        words.mark_learned(w.id).unwrap();

        let today = w.created_at.date();
        let yesterday = today.previous_day().unwrap();
        let started = datetime!(2026-01-01 12:00 UTC).replace_date(yesterday);
        sessions
            .save(NewSession {
                user_id: "alice".into(),
                messages: Vec::new(),
                started_at: started,
                ended_at: started,
            })
            .unwrap();

        let progress = user_progress(&words, &sessions, "alice", today);
        assert_eq!(progress.total_words, 2);
        assert_eq!(progress.learned_words, 1);
        assert_eq!(progress.dialogue_sessions, 1);
        assert_eq!(progress.streak_days, 2);
    }
}
