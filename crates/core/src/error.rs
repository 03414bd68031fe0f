//! Error types for engine operations and configuration.

/// Rejections from selection, commit and session operations.
///
/// All of them are local: the board and the selection are left exactly as
/// they were before the rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("coordinate ({row}, {col}) is outside the board")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("board size {size} is outside {min}..={max}")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("cell ({row}, {col}) is empty")]
    EmptyCell { row: usize, col: usize },

    #[error("coordinate is not adjacent to the end of the selection")]
    NonAdjacentExtension,

    #[error("cell tag differs from the selection tag")]
    TagMismatch,

    #[error("coordinate is already part of the selection")]
    DuplicateCoordinate,

    #[error("selection of {len} cell(s) is too short to harvest")]
    SubThresholdCommit { len: usize },

    #[error("game is not playable")]
    NotPlayable,
}

impl EngineError {
    /// Stable machine-readable identifier
    pub fn code(self) -> &'static str {
        match self {
            EngineError::InvalidCoordinate { .. } => "invalid_coordinate",
            EngineError::InvalidBoardSize { .. } => "invalid_board_size",
            EngineError::EmptyCell { .. } => "empty_cell",
            EngineError::NonAdjacentExtension => "non_adjacent_extension",
            EngineError::TagMismatch => "tag_mismatch",
            EngineError::DuplicateCoordinate => "duplicate_coordinate",
            EngineError::SubThresholdCommit { .. } => "sub_threshold_commit",
            EngineError::NotPlayable => "not_playable",
        }
    }
}

/// Errors that can occur when building an engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::InvalidCoordinate { row: 9, col: 2 };
        assert_eq!(err.to_string(), "coordinate (9, 2) is outside the board");
        assert_eq!(err.code(), "invalid_coordinate");

        let err = EngineError::InvalidBoardSize { size: 2, min: 3, max: 64 };
        assert_eq!(err.to_string(), "board size 2 is outside 3..=64");
        assert_eq!(err.code(), "invalid_board_size");

        let err = EngineError::SubThresholdCommit { len: 2 };
        assert_eq!(err.to_string(), "selection of 2 cell(s) is too short to harvest");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board_size must be in 3..=64".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board_size must be in 3..=64"
        );
    }
}
