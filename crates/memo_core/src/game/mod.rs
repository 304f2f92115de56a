//! Round progression for a full game.
//!
//! `GameSession` owns its pattern generator and random source; callers drive
//! it with taps and read back the current pattern for display.

pub mod record;
pub mod store;

pub use record::{GameOutcome, GameRecord};
pub use store::{RecordStore, StoreError};

use crate::config::GameConfig;
use crate::error::{ConfigError, SessionError};
use crate::pattern::{PatternData, PatternGenerator};
use crate::rng::RandomSource;
use crate::round::{RoundSession, TapResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Playing,
    Finished,
    /// Next pattern could not be generated; `start` begins a new game.
    Aborted,
}

/// Emitted when a tap completes a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: usize,
    pub perfect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTap {
    pub tap: TapResult,
    pub completed_round: Option<RoundSummary>,
    pub game_finished: bool,
}

pub struct GameSession<R: RandomSource> {
    generator: PatternGenerator,
    rng: R,
    record: GameRecord,
    round: Option<RoundSession>,
    current_round: usize,
    phase: GamePhase,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        let generator = PatternGenerator::new(config)?;
        let record = GameRecord::new(generator.config().round_count());
        Ok(Self { generator, rng, record, round: None, current_round: 0, phase: GamePhase::NotStarted })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn round_count(&self) -> usize {
        self.generator.config().round_count()
    }

    pub fn grid_size(&self) -> usize {
        self.generator.config().grid_size
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn into_record(self) -> GameRecord {
        self.record
    }

    /// Pattern of the round in progress.
    pub fn pattern(&self) -> Option<&PatternData> {
        match self.phase {
            GamePhase::Playing => self.round.as_ref().map(|r| r.pattern()),
            _ => None,
        }
    }

    pub fn round_session(&self) -> Option<&RoundSession> {
        self.round.as_ref()
    }

    /// Reset results and begin round 1. Also restarts a finished or aborted game.
    pub fn start(&mut self) -> Result<&PatternData, SessionError> {
        self.record.reset();
        self.current_round = 0;
        self.begin_round()
    }

    pub fn tap(&mut self, cell: usize) -> Result<GameTap, SessionError> {
        match self.phase {
            GamePhase::NotStarted => return Err(SessionError::NotStarted),
            GamePhase::Finished => return Err(SessionError::GameFinished),
            GamePhase::Aborted => return Err(SessionError::Aborted),
            GamePhase::Playing => {}
        }
        let round = self.round.as_mut().ok_or(SessionError::NotStarted)?;

        let tap = round.submit_tap(cell)?;
        if !tap.round_complete {
            return Ok(GameTap { tap, completed_round: None, game_finished: false });
        }

        let summary = RoundSummary { round: self.current_round, perfect: round.is_perfect() };
        self.record.record_round(summary.round, summary.perfect);

        self.current_round += 1;
        if self.current_round < self.round_count() {
            self.begin_round()?;
        } else {
            self.phase = GamePhase::Finished;
            log::info!("Game finished: {}", self.record.summary());
        }

        Ok(GameTap { tap, completed_round: Some(summary), game_finished: self.is_finished() })
    }

    fn begin_round(&mut self) -> Result<&PatternData, SessionError> {
        self.generator.set_round(self.current_round as i64);
        let pattern = match self.generator.generate_pattern(&mut self.rng) {
            Ok(pattern) => pattern,
            Err(err) => {
                log::warn!("Round {} could not start: {}", self.current_round + 1, err);
                self.phase = GamePhase::Aborted;
                self.round = None;
                return Err(err.into());
            }
        };
        let grid_size = self.grid_size();

        self.phase = GamePhase::Playing;
        let round = self.round.insert(RoundSession::new(pattern, grid_size));
        Ok(round.pattern())
    }
}
