//! Best-move selection from externally supplied score vectors.

use crate::error::OracleError;
use crate::game::COLS;

/// Solver value meaning "no score / column unplayable" rather than a real
/// evaluation.
pub const SENTINEL_SCORE: i32 = 100;

/// Replace sentinel entries with -1 so they never win a maximum
/// comparison. Real solver scores for this board are small integers, never
/// below -1 in practice; an all-sentinel vector cannot occur for a live
/// position since at least one column is playable.
pub fn normalize(scores: &[i32]) -> Vec<i32> {
    scores
        .iter()
        .map(|&score| if score == SENTINEL_SCORE { -1 } else { score })
        .collect()
}

/// A surviving position paired with the columns achieving the best score,
/// in ascending column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMoves {
    pub position: String,
    pub columns: Vec<usize>,
}

impl BestMoves {
    /// Select the best-scoring columns for a position.
    ///
    /// The score vector must hold exactly one entry per column; anything
    /// else is a broken oracle contract and comes back as an error. The
    /// maximum is taken over the *normalized* vector, so a sentinel can
    /// never shadow a real score.
    pub fn select(position: impl Into<String>, scores: &[i32]) -> Result<BestMoves, OracleError> {
        let position = position.into();
        if scores.len() != COLS {
            return Err(OracleError::ScoreLength {
                position,
                expected: COLS,
                actual: scores.len(),
            });
        }

        let normalized = normalize(scores);
        let best = normalized.iter().copied().max().unwrap_or(-1);
        let columns = normalized
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(col, _)| col)
            .collect();

        Ok(BestMoves { position, columns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_maps_sentinel_to_minus_one() {
        assert_eq!(
            normalize(&[3, 100, 3, -2, 100, 0, 3]),
            vec![3, -1, 3, -2, -1, 0, 3]
        );
    }

    #[test]
    fn test_select_collects_all_maxima_in_order() {
        let best = BestMoves::select("123456", &[3, 100, 3, -2, 100, 0, 3]).unwrap();
        assert_eq!(best.position, "123456");
        assert_eq!(best.columns, vec![0, 2, 6]);
    }

    #[test]
    fn test_select_single_best() {
        let best = BestMoves::select("44", &[-1, 0, 2, 5, 2, 0, -1]).unwrap();
        assert_eq!(best.columns, vec![3]);
    }

    #[test]
    fn test_select_with_negative_best() {
        let best = BestMoves::select("1", &[-4, -2, -3, -2, -5, -6, -4]).unwrap();
        assert_eq!(best.columns, vec![1, 3]);
    }

    #[test]
    fn test_sentinel_does_not_shadow_real_maximum() {
        // taking the maximum before normalizing would find 100 and match
        // nothing
        let best = BestMoves::select("22", &[100, 5, 2, 100, -1, 0, 3]).unwrap();
        assert_eq!(best.columns, vec![1]);
    }

    #[test]
    fn test_normalized_sentinel_ties_with_scores_below_minus_one() {
        // inherited assumption: real scores stay >= -1, so the sentinel's
        // normalized value can outrank anything lower
        let best = BestMoves::select("22", &[100, -3, -5, -3, -4, -2, -6]).unwrap();
        assert_eq!(best.columns, vec![0]);
    }

    #[test]
    fn test_wrong_length_is_an_error() {
        let err = BestMoves::select("44", &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            OracleError::ScoreLength {
                expected: 7,
                actual: 3,
                ..
            }
        ));
    }
}
