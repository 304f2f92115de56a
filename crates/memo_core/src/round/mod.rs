//! Player input matching for one round.
//!
//! Every tap consumes one answer step whether it hits or not. A miss marks
//! the round imperfect but does not end it early; the round completes after
//! as many taps as there are answers.

use crate::error::SessionError;
use crate::pattern::PatternData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapOutcome {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapResult {
    pub outcome: TapOutcome,
    /// Cell the player should have tapped
    pub expected: usize,
    pub round_complete: bool,
}

#[derive(Debug, Clone)]
pub struct RoundSession {
    pattern: PatternData,
    grid_size: usize,
    answer_index: usize,
    has_wrong_answer: bool,
}

impl RoundSession {
    pub fn new(pattern: PatternData, grid_size: usize) -> Self {
        Self { pattern, grid_size, answer_index: 0, has_wrong_answer: false }
    }

    pub fn pattern(&self) -> &PatternData {
        &self.pattern
    }

    /// Taps made so far.
    pub fn progress(&self) -> usize {
        self.answer_index
    }

    pub fn expected_cell(&self) -> Option<usize> {
        self.pattern.answer_positions.get(self.answer_index).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.answer_index >= self.pattern.answer_count
    }

    pub fn is_perfect(&self) -> bool {
        self.is_complete() && !self.has_wrong_answer
    }

    pub fn has_wrong_answer(&self) -> bool {
        self.has_wrong_answer
    }

    pub fn submit_tap(&mut self, cell: usize) -> Result<TapResult, SessionError> {
        if cell >= self.grid_size {
            return Err(SessionError::CellOutOfRange { cell, grid_size: self.grid_size });
        }
        let Some(expected) = self.expected_cell() else {
            return Err(SessionError::RoundComplete);
        };

        let outcome = if cell == expected {
            TapOutcome::Correct
        } else {
            self.has_wrong_answer = true;
            TapOutcome::Wrong
        };
        self.answer_index += 1;

        Ok(TapResult { outcome, expected, round_complete: self.is_complete() })
    }
}
