use thiserror::Error;

/// Rejected game configuration.
///
/// Raised when a configuration is loaded or a generator is built, never at
/// generation time.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Grid size must be positive")]
    EmptyGrid,

    #[error("{field} has {found} entries, expected at least {expected}")]
    MissingRounds { field: &'static str, expected: usize, found: usize },

    #[error("Round {round}: answer count must be at least 1")]
    NoAnswers { round: usize },

    #[error("Round {round}: {answers} answers + {fakes} fakes exceed grid size {grid_size}")]
    GridOverflow { round: usize, answers: usize, fakes: usize, grid_size: usize },

    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failure while generating or checking a pattern.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("No free grid cell found after {attempts} draws ({used} of {grid_size} cells used)")]
    SamplingExhausted { attempts: usize, used: usize, grid_size: usize },

    #[error("Position {position} is outside the grid (size {grid_size})")]
    PositionOutOfRange { position: usize, grid_size: usize },

    #[error("Position {position} is used more than once")]
    DuplicatePosition { position: usize },

    #[error("Answer count {cached} does not match {actual} answer positions")]
    AnswerCountMismatch { cached: usize, actual: usize },

    #[error("Fake at position {position} is inserted after step {index}, but only {answer_count} steps exist")]
    InsertionOutOfRange { position: usize, index: usize, answer_count: usize },
}

/// Misuse of a round or game session.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cell {cell} is outside the grid (size {grid_size})")]
    CellOutOfRange { cell: usize, grid_size: usize },

    #[error("Round is already complete")]
    RoundComplete,

    #[error("Game has not been started")]
    NotStarted,

    #[error("Game is already finished")]
    GameFinished,

    #[error("Game aborted after a failed round start; start a new game")]
    Aborted,

    #[error("Pattern generation failed: {0}")]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
