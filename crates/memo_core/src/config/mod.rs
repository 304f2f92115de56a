//! # Game Configuration
//!
//! Per-round answer/fake counts and the grid size. Everything the pattern
//! generator reads comes from here, so balancing a round means editing data,
//! not code.
//!
//! ## Usage
//! ```rust
//! use memo_core::config::GameConfig;
//!
//! let config = GameConfig::default();
//! assert_eq!(config.answer_count(2), 6);
//!
//! let custom = GameConfig::from_json(
//!     r#"{"grid_size": 9, "answer_counts_per_round": [3, 4, 5], "fake_counts_per_round": [0, 1, 2]}"#,
//! ).unwrap();
//! assert_eq!(custom.fake_count(0), 0);
//! ```

mod env;

pub use env::{load_from_env, CONFIG_PATH_ENV};

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Cells on the board (3x3).
pub const GRID_SIZE: usize = 9;

/// Rounds in one game.
pub const ROUND_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Addressable cells (default: 9)
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// Answers the player must reproduce, one entry per round (default: 4, 5, 6)
    pub answer_counts_per_round: Vec<usize>,
    /// Distractors shown during playback, one entry per round (default: 1, 2, 2)
    pub fake_counts_per_round: Vec<usize>,
}

fn default_grid_size() -> usize {
    GRID_SIZE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            answer_counts_per_round: vec![4, 5, 6],
            fake_counts_per_round: vec![1, 2, 2],
        }
    }
}

impl GameConfig {
    /// Number of rounds played per game.
    pub fn round_count(&self) -> usize {
        ROUND_COUNT
    }

    pub fn answer_count(&self, round: usize) -> usize {
        self.answer_counts_per_round[round]
    }

    pub fn fake_count(&self, round: usize) -> usize {
        self.fake_counts_per_round[round]
    }

    /// Reject configurations that would make position sampling starve.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        check_round_entries("answer_counts_per_round", &self.answer_counts_per_round)?;
        check_round_entries("fake_counts_per_round", &self.fake_counts_per_round)?;

        for round in 0..ROUND_COUNT {
            let answers = self.answer_counts_per_round[round];
            let fakes = self.fake_counts_per_round[round];

            if answers == 0 {
                return Err(ConfigError::NoAnswers { round });
            }
            if answers.checked_add(fakes).map_or(true, |total| total > self.grid_size) {
                return Err(ConfigError::GridOverflow {
                    round,
                    answers,
                    fakes,
                    grid_size: self.grid_size,
                });
            }
        }

        Ok(())
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. `.yaml`/`.yml` are parsed as YAML, anything else as JSON.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn check_round_entries(field: &'static str, counts: &[usize]) -> Result<()> {
    if counts.len() < ROUND_COUNT {
        return Err(ConfigError::MissingRounds { field, expected: ROUND_COUNT, found: counts.len() });
    }
    Ok(())
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.grid_size, 9);
        assert_eq!(cfg.answer_counts_per_round, vec![4, 5, 6]);
        assert_eq!(cfg.fake_counts_per_round, vec![1, 2, 2]);
    }

    #[test]
    fn test_overflowing_round_is_rejected() {
        let cfg = GameConfig {
            answer_counts_per_round: vec![4, 5, 8],
            ..GameConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::GridOverflow { round, answers, fakes, grid_size }) => {
                assert_eq!((round, answers, fakes, grid_size), (2, 8, 2, 9));
            }
            other => panic!("expected GridOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_count_is_rejected_not_overflowed() {
        let json = format!(
            r#"{{"answer_counts_per_round": [{}, 4, 5], "fake_counts_per_round": [1, 1, 1]}}"#,
            usize::MAX
        );
        match GameConfig::from_json(&json) {
            Err(ConfigError::GridOverflow { round, answers, fakes, grid_size }) => {
                assert_eq!((round, answers, fakes, grid_size), (0, usize::MAX, 1, 9));
            }
            other => panic!("expected GridOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_exactly_full_grid_is_accepted() {
        let cfg = GameConfig {
            answer_counts_per_round: vec![8, 7, 7],
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_short_lists_are_rejected() {
        let cfg = GameConfig {
            fake_counts_per_round: vec![1, 2],
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::MissingRounds { field: "fake_counts_per_round", expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_zero_answers_rejected() {
        let cfg = GameConfig {
            answer_counts_per_round: vec![4, 0, 6],
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NoAnswers { round: 1 })));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let cfg = GameConfig { grid_size: 0, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyGrid)));
    }

    #[test]
    fn test_json_grid_size_defaults() {
        let cfg = GameConfig::from_json(
            r#"{"answer_counts_per_round": [3, 4, 5], "fake_counts_per_round": [0, 1, 2]}"#,
        )
        .unwrap();
        assert_eq!(cfg.grid_size, GRID_SIZE);
        assert_eq!(cfg.answer_count(1), 4);
    }

    #[test]
    fn test_json_validation_runs_on_load() {
        let result = GameConfig::from_json(
            r#"{"grid_size": 4, "answer_counts_per_round": [3, 3, 3], "fake_counts_per_round": [1, 1, 2]}"#,
        );
        assert!(matches!(result, Err(ConfigError::GridOverflow { round: 2, .. })));
    }

    #[test]
    fn test_yaml_config() {
        let yaml = "grid_size: 9\nanswer_counts_per_round: [2, 3, 4]\nfake_counts_per_round: [1, 1, 3]\n";
        let cfg = GameConfig::from_yaml(yaml).unwrap();
        assert_eq!(cfg.fake_count(2), 3);
    }

    #[test]
    fn test_load_from_path_picks_parser_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("rounds.yml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "answer_counts_per_round: [4, 5, 6]").unwrap();
        writeln!(file, "fake_counts_per_round: [1, 1, 1]").unwrap();
        assert_eq!(GameConfig::load_from_path(&yaml_path).unwrap().fake_count(1), 1);

        let json_path = dir.path().join("rounds.json");
        std::fs::write(&json_path, GameConfig::default().to_json().unwrap()).unwrap();
        assert_eq!(GameConfig::load_from_path(&json_path).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConfig::load_from_path("/nonexistent/memo/config.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
