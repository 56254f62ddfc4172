use thiserror::Error;

/// Errors raised by the season model.
///
/// Every variant is a caller-input violation; the operation that returned it
/// has not mutated any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeasonError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("driver id must be positive")]
    InvalidDriverId,

    #[error("unknown driver id {0}")]
    InvalidDriver(u32),

    #[error("position {position} is out of range (valid: 1..={max})")]
    InvalidPosition { position: usize, max: usize },

    #[error("driver is not assigned to a season")]
    SeasonNotAssigned,

    #[error("team '{team}' already has two drivers")]
    TeamFull { team: String },

    #[error("bad season info at line {line}: {reason}")]
    BadSeasonInfo { line: usize, reason: String },

    #[error("race results list {actual} drivers, season has {expected}")]
    ResultsLength { expected: usize, actual: usize },

    #[error("driver id {0} appears more than once in race results")]
    DuplicateResult(u32),

    #[error("points total overflowed for driver {0}")]
    PointsOverflow(u32),
}

pub type Result<T, E = SeasonError> = std::result::Result<T, E>;
