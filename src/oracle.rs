//! The score oracle seam.
//!
//! The production oracle for this table is an external solver service that
//! takes a position string and answers with seven per-column scores.
//! Everything network-shaped lives behind [`ScoreOracle`]; the crate ships
//! a file-backed implementation so the pipeline runs against preloaded
//! solver output.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OracleError;

/// Source of per-column scores for a position.
pub trait ScoreOracle {
    /// Seven scores, one per column, each either a signed evaluation or
    /// [`SENTINEL_SCORE`](crate::score::SENTINEL_SCORE) for an unplayable
    /// column.
    fn score(&self, position: &str) -> Result<Vec<i32>, OracleError>;
}

/// Scores preloaded from a JSON document keyed by position string, in the
/// shape the solver returns per position:
///
/// ```json
/// { "123456": [3, 100, 3, -2, 100, 0, 3] }
/// ```
#[derive(Debug)]
pub struct FileOracle {
    scores: HashMap<String, Vec<i32>>,
}

impl FileOracle {
    pub fn load(path: &Path) -> Result<Self, OracleError> {
        let content = fs::read_to_string(path).map_err(|source| OracleError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let scores = serde_json::from_str(&content).map_err(|source| OracleError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(FileOracle { scores })
    }

    /// Number of positions with scores on file
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl ScoreOracle for FileOracle {
    fn score(&self, position: &str) -> Result<Vec<i32>, OracleError> {
        self.scores
            .get(position)
            .cloned()
            .ok_or_else(|| OracleError::MissingPosition(position.to_string()))
    }
}

/// Oracle settings, loadable from the `[oracle]` config section.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// JSON file of solver scores keyed by position string.
    pub scores_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_scores(json: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("scores.json")).unwrap();
        write!(file, "{json}").unwrap();
        dir
    }

    #[test]
    fn test_load_and_score() {
        let dir = write_scores(r#"{"123456": [3, 100, 3, -2, 100, 0, 3], "44": [0, 0, 0, 1, 0, 0, 0]}"#);
        let oracle = FileOracle::load(&dir.path().join("scores.json")).unwrap();

        assert_eq!(oracle.len(), 2);
        assert_eq!(oracle.score("44").unwrap(), vec![0, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_missing_position() {
        let dir = write_scores(r#"{"44": [0, 0, 0, 1, 0, 0, 0]}"#);
        let oracle = FileOracle::load(&dir.path().join("scores.json")).unwrap();

        let err = oracle.score("7777").unwrap_err();
        assert!(matches!(err, OracleError::MissingPosition(p) if p == "7777"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = write_scores("not json");
        let err = FileOracle::load(&dir.path().join("scores.json")).unwrap_err();
        assert!(matches!(err, OracleError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileOracle::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, OracleError::FileRead { .. }));
    }
}
