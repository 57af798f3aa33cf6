use crate::models::{ProfileSet, ScoreMatrix, TokenSet, UserId};

/// Decimal places kept in emitted scores unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 3;

/// Jaccard similarity `|a ∩ b| / |a ∪ b|` between two token sets.
/// Returns 0.0 when both sets are empty.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Round to `precision` decimal places, halves away from zero.
///
/// The half rule applies to the scaled `f64` (`value * 10^precision`), not
/// to the exact rational, so a value just below a tie can round up when the
/// multiplication lands on `.5`.
pub fn round_score(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Score every unordered pair of distinct users once and record both
/// directions with the same rounded score. Fewer than two profiles yield an
/// empty matrix.
pub fn compute_match_scores(profiles: &ProfileSet, precision: u32) -> ScoreMatrix {
    let users: Vec<(&UserId, &TokenSet)> = profiles
        .iter()
        .map(|(user, profile)| (user, profile.token_set()))
        .collect();
    let mut matrix = ScoreMatrix::new();

    for (i, (user_i, tokens_i)) in users.iter().enumerate() {
        for (user_j, tokens_j) in &users[i + 1..] {
            let score = round_score(jaccard(tokens_i, tokens_j), precision);
            tracing::debug!(source = %user_i, target = %user_j, score, "Scored pair");
            matrix.insert_pair(user_i, user_j, score);
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;

    fn set(tokens: &[&str]) -> TokenSet {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn profiles(entries: &[(&str, &[&str])]) -> ProfileSet {
        entries
            .iter()
            .map(|(user, tokens)| (UserId::new(*user), Profile::new(set(tokens))))
            .collect()
    }

    #[test]
    fn test_jaccard_identical() {
        let a = set(&["hello", "world", "foo"]);
        assert!((jaccard(&a, &a.clone()) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jaccard_disjoint() {
        let a = set(&["hello", "world"]);
        let b = set(&["foo", "bar", "baz"]);
        assert!((jaccard(&a, &b) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jaccard_one_side_empty() {
        let a = set(&["hello"]);
        assert_eq!(jaccard(&a, &TokenSet::new()), 0.0);
        assert_eq!(jaccard(&TokenSet::new(), &a), 0.0);
    }

    #[test]
    fn test_jaccard_both_empty_falls_back_to_zero() {
        assert_eq!(jaccard(&TokenSet::new(), &TokenSet::new()), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = set(&["a", "b", "c"]);
        let b = set(&["b", "c", "d"]);
        assert!((jaccard(&a, &b) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(1.0 / 3.0, 3), 0.333);
        assert_eq!(round_score(2.0 / 3.0, 3), 0.667);
        assert_eq!(round_score(0.0625, 3), 0.063);
        assert_eq!(round_score(0.5, 0), 1.0);
        assert_eq!(round_score(0.123456, 5), 0.12346);
    }

    #[test]
    fn test_round_score_ties_on_scaled_value() {
        // 62.5 and 2.5 are exact halves once scaled
        assert_eq!(round_score(0.0625, 3), 0.063);
        assert_eq!(round_score(-0.0625, 3), -0.063);
        assert_eq!(round_score(2.5, 0), 3.0);
        assert_eq!(round_score(0.5, 0), 1.0);
    }

    #[test]
    fn test_no_pairs_for_zero_or_one_user() {
        assert!(compute_match_scores(&ProfileSet::new(), DEFAULT_PRECISION).is_empty());
        let single = profiles(&[("userA", &["hello"])]);
        assert!(compute_match_scores(&single, DEFAULT_PRECISION).is_empty());
    }

    #[test]
    fn test_each_pair_emitted_in_both_directions() {
        let profile_set = profiles(&[
            ("userA", &["a", "b"]),
            ("userB", &["b", "c"]),
            ("userC", &["c", "d"]),
            ("userD", &["d"]),
        ]);
        let matrix = compute_match_scores(&profile_set, DEFAULT_PRECISION);

        assert_eq!(matrix.len(), 4 * 3);
        for entry in &matrix {
            assert_ne!(entry.source, entry.target);
            assert_eq!(
                matrix.get(entry.target.as_str(), entry.source.as_str()),
                Some(entry.score)
            );
        }
    }

    #[test]
    fn test_scores_are_rounded() {
        let profile_set = profiles(&[("userA", &["a", "b", "c"]), ("userB", &["a"])]);
        let matrix = compute_match_scores(&profile_set, DEFAULT_PRECISION);
        assert_eq!(matrix.get("userA", "userB"), Some(0.333));
    }

    #[test]
    fn test_identical_profiles_score_one() {
        let profile_set = profiles(&[
            ("userA", &["defi", "yield"]),
            ("userB", &["yield", "defi"]),
        ]);
        let matrix = compute_match_scores(&profile_set, DEFAULT_PRECISION);
        assert_eq!(matrix.get("userA", "userB"), Some(1.0));
    }

    #[test]
    fn test_empty_profiles_score_zero() {
        let profile_set = profiles(&[("userA", &[]), ("userB", &[])]);
        let matrix = compute_match_scores(&profile_set, DEFAULT_PRECISION);
        assert_eq!(matrix.get("userA", "userB"), Some(0.0));
        assert_eq!(matrix.get("userB", "userA"), Some(0.0));
    }
}
