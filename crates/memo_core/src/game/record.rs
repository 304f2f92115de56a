use crate::config::ROUND_COUNT;
use serde::{Deserialize, Serialize};

/// Final verdict shown on the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// At least one round cleared without a mistake
    Cleared,
    GameOver,
}

/// Per-round pass/fail for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// `None` = round not played yet, `Some(true)` = perfect
    pub rounds: Vec<Option<bool>>,
    /// Unix millis of the last recorded round
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new(ROUND_COUNT)
    }
}

impl GameRecord {
    pub fn new(round_count: usize) -> Self {
        Self { rounds: vec![None; round_count], updated_at: None }
    }

    pub fn reset(&mut self) {
        self.rounds.iter_mut().for_each(|r| *r = None);
        self.updated_at = None;
    }

    /// Out-of-range rounds are ignored.
    pub fn record_round(&mut self, round: usize, perfect: bool) {
        let Some(slot) = self.rounds.get_mut(round) else {
            log::warn!("Ignoring result for round {} (only {} rounds)", round + 1, self.rounds.len());
            return;
        };

        *slot = Some(perfect);
        self.updated_at = Some(chrono::Utc::now().timestamp_millis());
        log::info!("Round {} recorded: {}", round + 1, if perfect { "perfect" } else { "failed" });
    }

    pub fn round_result(&self, round: usize) -> Option<bool> {
        self.rounds.get(round).copied().flatten()
    }

    pub fn perfect_round_count(&self) -> usize {
        self.rounds.iter().filter(|r| **r == Some(true)).count()
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_some()).count()
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.perfect_round_count() > 0 {
            GameOutcome::Cleared
        } else {
            GameOutcome::GameOver
        }
    }

    pub fn summary(&self) -> String {
        format!("{} of {} rounds perfect", self.perfect_round_count(), self.rounds.len())
    }
}
