use anyhow::Context;
use async_trait::async_trait;
use parking_lot::Mutex;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

pub const CANNED_REPLIES: [&str; 5] = [
    "Très bien! Votre français s'améliore beaucoup.",
    "Excellente réponse! Continuez comme ça.",
    "Je comprends. Pouvez-vous me dire plus sur cela?",
    "Parfait! Maintenant, essayons une phrase plus complexe.",
    "Bravo! Vous utilisez bien les mots que nous avons appris.",
];

pub const SUGGESTED_WORDS: [&str; 3] = ["bonjour", "merci", "au revoir"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorReply {
    pub response: String,
    pub suggested_words: Vec<String>,
}

/// Conversational tutor behind `/dialogue`. A language-model backed client
/// would implement this.
#[async_trait]
pub trait TutorClient: Send + Sync {
    async fn reply(&self, message: &str, user_id: &str) -> anyhow::Result<TutorReply>;
}

/// Picks one of [`CANNED_REPLIES`] uniformly at random, ignoring the input.
pub struct CannedTutor {
    rng: Mutex<StdRng>,
}

impl CannedTutor {
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

#[async_trait]
impl TutorClient for CannedTutor {
    async fn reply(&self, _message: &str, user_id: &str) -> anyhow::Result<TutorReply> {
        let response = {
            let mut rng = self.rng.lock();
            *CANNED_REPLIES
                .as_slice()
                .choose(&mut *rng)
                .context("no canned replies")?
        };
        debug!(%user_id, "canned tutor reply");
        Ok(TutorReply {
            response: response.to_string(),
            suggested_words: SUGGESTED_WORDS.iter().map(|w| w.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[tokio::test]
    async fn replies_come_from_the_canned_set() {
        let tutor = CannedTutor::seeded(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let reply = tutor.reply("Bonjour!", "alice").await.unwrap();
            assert!(CANNED_REPLIES.contains(&reply.response.as_str()));
            assert_eq!(reply.suggested_words, vec!["bonjour", "merci", "au revoir"]);
            seen.insert(reply.response);
        }
        assert_eq!(seen.len(), CANNED_REPLIES.len());
    }

    #[tokio::test]
    async fn same_seed_same_sequence_regardless_of_input() {
        let a = CannedTutor::seeded(42);
        let b = CannedTutor::seeded(42);
        for i in 0..20 {
            let ra = a.reply("salut", "alice").await.unwrap();
            let rb = b.reply(&format!("message {i}"), "bob").await.unwrap();
            assert_eq!(ra, rb);
        }
    }
}
