use crate::config::AppConfig;
use crate::dialogue::{CannedTutor, SessionStore, TutorClient};
use crate::words::WordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub words: Arc<WordStore>,
    pub sessions: Arc<SessionStore>,
    pub tutor: Arc<dyn TutorClient>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let tutor = match config.tutor_seed {
            Some(seed) => {
                tracing::info!(seed, "canned tutor uses a fixed seed");
                CannedTutor::seeded(seed)
            }
            None => CannedTutor::from_entropy(),
        };

        Ok(Self::from_parts(config, Arc::new(tutor)))
    }

    pub fn from_parts(config: Arc<AppConfig>, tutor: Arc<dyn TutorClient>) -> Self {
        Self {
            config,
            words: Arc::new(WordStore::new()),
            sessions: Arc::new(SessionStore::new()),
            tutor,
        }
    }

    /// Fresh, empty state with a deterministic tutor.
    #[cfg(test)]
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(AppConfig::default()),
            Arc::new(CannedTutor::seeded(0)) as Arc<dyn TutorClient>,
        )
    }
}
