use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProgress {
    pub total_words: usize,
    pub learned_words: usize,
    pub dialogue_sessions: usize,
    pub streak_days: u32,
}
