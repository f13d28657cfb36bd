use crate::error::ScoringError;
use crate::types::{AlignedPair, SimilarityMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Match,
    Delete,
    Insert,
}

/// Similarity-weighted global (Needleman–Wunsch) alignment between the
/// normalized reference sequence and the normalized hypothesis sequence.
///
/// Gaps contribute `gap_penalty` regardless of position. Ties are resolved
/// MATCH over DELETE over INSERT; callers depend on this order to get
/// reproducible alignments when several paths score equally.
///
/// Degenerate case: either side empty yields an empty alignment, reported
/// upstream rather than treated as failure. O(n*m) time and space.
pub fn align_global(
    original: &[String],
    hypothesis: &[String],
    similarities: &SimilarityMatrix,
    gap_penalty: f32,
) -> Result<Vec<AlignedPair>, ScoringError> {
    let n = original.len();
    let m = hypothesis.len();

    if similarities.rows() != n || similarities.cols() != m {
        return Err(ScoringError::DimensionMismatch {
            expected_rows: n,
            expected_cols: m,
            actual_rows: similarities.rows(),
            actual_cols: similarities.cols(),
        });
    }

    if n == 0 || m == 0 {
        return Ok(Vec::new());
    }

    let width = m + 1;
    let idx = |i: usize, j: usize| i * width + j;

    let mut score = vec![0.0f32; (n + 1) * width];
    let mut path = vec![Step::Match; (n + 1) * width];

    for i in 1..=n {
        score[idx(i, 0)] = i as f32 * gap_penalty;
        path[idx(i, 0)] = Step::Delete;
    }
    for j in 1..=m {
        score[idx(0, j)] = j as f32 * gap_penalty;
        path[idx(0, j)] = Step::Insert;
    }

    for i in 1..=n {
        for j in 1..=m {
            let matched = score[idx(i - 1, j - 1)] + similarities.get(i - 1, j - 1);
            let deleted = score[idx(i - 1, j)] + gap_penalty;
            let inserted = score[idx(i, j - 1)] + gap_penalty;

            let best = matched.max(deleted).max(inserted);
            score[idx(i, j)] = best;
            path[idx(i, j)] = if best == matched {
                Step::Match
            } else if best == deleted {
                Step::Delete
            } else {
                Step::Insert
            };
        }
    }

    let mut pairs = Vec::with_capacity(n + m);
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && path[idx(i, j)] == Step::Match {
            pairs.push(AlignedPair::matched(
                original[i - 1].clone(),
                hypothesis[j - 1].clone(),
                similarities.get(i - 1, j - 1),
            ));
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || path[idx(i, j)] == Step::Delete) {
            pairs.push(AlignedPair::unsung(original[i - 1].clone()));
            i -= 1;
        } else {
            pairs.push(AlignedPair::extra(hypothesis[j - 1].clone()));
            j -= 1;
        }
    }
    pairs.reverse();
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    /// Identity-like matrix: 1.0 where the words are equal, `cross` elsewhere.
    fn identity_matrix(original: &[String], hypothesis: &[String], cross: f32) -> SimilarityMatrix {
        let rows = original
            .iter()
            .map(|o| {
                hypothesis
                    .iter()
                    .map(|h| if o == h { 1.0 } else { cross })
                    .collect()
            })
            .collect();
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    fn originals(pairs: &[AlignedPair]) -> Vec<String> {
        pairs.iter().filter_map(|p| p.original.clone()).collect()
    }

    fn hypotheses(pairs: &[AlignedPair]) -> Vec<String> {
        pairs.iter().filter_map(|p| p.hypothesis.clone()).collect()
    }

    #[test]
    fn trailing_reference_word_becomes_unsung_gap() {
        let o = words(&["i", "love", "you"]);
        let t = words(&["i", "love"]);
        let sim = identity_matrix(&o, &t, 0.1);

        let pairs = align_global(&o, &t, &sim, -0.4).unwrap();
        assert_eq!(
            pairs,
            vec![
                AlignedPair::matched("i".into(), "i".into(), 1.0),
                AlignedPair::matched("love".into(), "love".into(), 1.0),
                AlignedPair::unsung("you".into()),
            ]
        );
    }

    #[test]
    fn identical_sequences_align_on_the_diagonal() {
        let o = words(&["twinkle", "twinkle", "little", "star"]);
        let sim = identity_matrix(&o, &o, 0.1);
        let pairs = align_global(&o, &o, &sim, -0.4).unwrap();
        assert_eq!(pairs.len(), o.len());
        for (pair, word) in pairs.iter().zip(&o) {
            assert_eq!(pair.original.as_deref(), Some(word.as_str()));
            assert_eq!(pair.hypothesis.as_deref(), Some(word.as_str()));
            assert_eq!(pair.similarity, 1.0);
        }
    }

    #[test]
    fn extra_hypothesis_word_becomes_original_gap() {
        let o = words(&["hello", "world"]);
        let t = words(&["hello", "uh", "world"]);
        let sim = identity_matrix(&o, &t, 0.1);
        let pairs = align_global(&o, &t, &sim, -0.4).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1].original, None);
        assert_eq!(pairs[1].hypothesis.as_deref(), Some("uh"));
        assert_eq!(pairs[1].similarity, 0.0);
    }

    #[test]
    fn either_side_empty_yields_empty_alignment() {
        let o = words(&["a", "b"]);
        let empty: Vec<String> = Vec::new();
        let pairs = align_global(&o, &empty, &SimilarityMatrix::zeroed(2, 0), -0.4).unwrap();
        assert!(pairs.is_empty());
        let pairs = align_global(&empty, &o, &SimilarityMatrix::zeroed(0, 2), -0.4).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn dimension_mismatch_is_a_contract_violation() {
        let o = words(&["a", "b"]);
        let t = words(&["a"]);
        let result = align_global(&o, &t, &SimilarityMatrix::zeroed(3, 1), -0.4);
        assert!(matches!(result, Err(ScoringError::DimensionMismatch { .. })));
    }

    #[test]
    fn removing_gaps_recovers_both_inputs_in_order() {
        let o = words(&["we", "will", "rock", "you"]);
        let t = words(&["we", "rock", "you", "yeah"]);
        let sim = identity_matrix(&o, &t, 0.05);
        let pairs = align_global(&o, &t, &sim, -0.4).unwrap();

        assert_eq!(originals(&pairs), o);
        assert_eq!(hypotheses(&pairs), t);
        // length invariant: n + insertions == m + deletions == padded length
        let insertions = pairs.iter().filter(|p| p.original.is_none()).count();
        let deletions = pairs.iter().filter(|p| p.hypothesis.is_none()).count();
        assert_eq!(pairs.len(), o.len() + insertions);
        assert_eq!(pairs.len(), t.len() + deletions);
    }

    #[test]
    fn ties_prefer_match_over_gaps() {
        // All-zero similarities with a zero gap-like penalty would tie every
        // move; use a uniform matrix where match and the two gap routes score
        // identically at each cell. MATCH must win, giving a gapless diagonal.
        let o = words(&["a", "b"]);
        let t = words(&["x", "y"]);
        let sim = SimilarityMatrix::from_rows(vec![vec![-0.8, -0.8], vec![-0.8, -0.8]]).unwrap();
        let pairs = align_global(&o, &t, &sim, -0.4).unwrap();
        // match path: -0.8 + -0.8 = -1.6; delete-then-insert ties at -1.6.
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.original.is_some() && p.hypothesis.is_some()));
    }
}
