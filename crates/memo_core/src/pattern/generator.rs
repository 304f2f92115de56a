//! Pattern generator: answer sequence + distractors for one round.

use super::policy::FakeTypePolicy;
use super::types::{FakeEntry, FakeType, PatternData};
use crate::config::GameConfig;
use crate::error::{ConfigError, PatternError};
use crate::rng::RandomSource;
use std::collections::HashSet;

/// Upper bound on rejection-sampling draws for one free cell.
///
/// A validated config always leaves a free cell, so hitting this means the
/// random source is broken rather than unlucky.
pub const MAX_DRAW_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone)]
pub struct PatternGenerator {
    config: GameConfig,
    current_round: usize,
}

impl PatternGenerator {
    /// Validates `config` up front so generation can never starve.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, current_round: 0 })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// Select the round used by the next `generate_pattern` call.
    ///
    /// Out-of-range values are clamped to the first/last round, not rejected.
    pub fn set_round(&mut self, round: i64) {
        let last = self.config.round_count().saturating_sub(1) as i64;
        self.current_round = round.clamp(0, last) as usize;
    }

    /// Build a fresh pattern for the current round.
    ///
    /// Draw order per fake is position, type, insertion step, so a scripted
    /// source fully determines the result.
    pub fn generate_pattern<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PatternData, PatternError> {
        let round = self.current_round;
        let grid_size = self.config.grid_size;
        let answer_count = self.config.answer_count(round);
        let fake_count = self.config.fake_count(round);

        let mut used_positions = HashSet::with_capacity(answer_count + fake_count);

        let mut answer_positions = Vec::with_capacity(answer_count);
        for _ in 0..answer_count {
            let position = draw_unused_position(grid_size, &used_positions, rng)?;
            answer_positions.push(position);
            used_positions.insert(position);
        }

        let policy = FakeTypePolicy::for_round(round);
        let mut used_types: Vec<FakeType> = Vec::new();
        let mut fake_positions = Vec::with_capacity(fake_count);

        for _ in 0..fake_count {
            let position = draw_unused_position(grid_size, &used_positions, rng)?;
            let fake_type = policy.pick(&used_types, rng);
            if !used_types.contains(&fake_type) {
                used_types.push(fake_type);
            }
            let insert_after_index = rng.next_below(answer_count);

            fake_positions.push(FakeEntry { position, fake_type, insert_after_index });
            used_positions.insert(position);
        }

        log::debug!(
            "Pattern generated - round: {}, answers: {}, fakes: {}",
            round + 1,
            answer_count,
            fake_count
        );

        Ok(PatternData { answer_positions, fake_positions, answer_count })
    }
}

/// Rejection sampling over the full grid.
fn draw_unused_position<R: RandomSource + ?Sized>(
    grid_size: usize,
    used: &HashSet<usize>,
    rng: &mut R,
) -> Result<usize, PatternError> {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let position = rng.next_below(grid_size);
        if !used.contains(&position) {
            return Ok(position);
        }
    }

    Err(PatternError::SamplingExhausted {
        attempts: MAX_DRAW_ATTEMPTS,
        used: used.len(),
        grid_size,
    })
}
