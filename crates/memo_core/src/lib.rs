//! # memo_core - Memory Pattern Game Logic
//!
//! A 3x3 grid flashes a sequence of answer cells mixed with look-alike
//! distractors; the player taps the answers back in order over three rounds
//! of rising difficulty.
//!
//! ## Features
//! - Pattern generation with per-round distractor rules
//! - Deterministic output for a given seed (injected random source)
//! - Config validated at load time (JSON/YAML)
//! - Round input matching, game progression and result persistence

pub mod config;
pub mod error;
pub mod game;
pub mod pattern;
pub mod rng;
pub mod round;

pub use config::{GameConfig, GRID_SIZE, ROUND_COUNT};
pub use error::{ConfigError, PatternError, SessionError};
pub use game::{GameOutcome, GameRecord, GameSession, RecordStore, StoreError};
pub use pattern::{FakeEntry, FakeType, FakeTypePolicy, PatternData, PatternGenerator, RevealStep};
pub use rng::{seeded, RandomSource, ScriptedRandom};
pub use round::{RoundSession, TapOutcome, TapResult};
