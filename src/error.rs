use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors surfaced by the score oracle and by score-vector consumers.
///
/// These are contract breaches with the external solver, not expected
/// rejections; they propagate to the caller rather than being guessed
/// around.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("failed to read score file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse score file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no scores for position \"{0}\"")]
    MissingPosition(String),

    #[error("expected {expected} scores for position \"{position}\", got {actual}")]
    ScoreLength {
        position: String,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("generator.target_length must be <= 42".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: generator.target_length must be <= 42"
        );
    }

    #[test]
    fn test_missing_position_display() {
        let err = OracleError::MissingPosition("123456".to_string());
        assert_eq!(err.to_string(), "no scores for position \"123456\"");
    }

    #[test]
    fn test_score_length_display() {
        let err = OracleError::ScoreLength {
            position: "44".to_string(),
            expected: 7,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "expected 7 scores for position \"44\", got 3"
        );
    }
}
