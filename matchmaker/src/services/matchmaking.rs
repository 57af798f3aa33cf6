use crate::config::ScoringConfig;
use crate::error::{MatchError, Result};
use crate::intelligence::{build_profiles, compute_match_scores};
use crate::models::{ProfileSet, ScoreEntry, ScoreMatrix, UserDirectory};

/// Profiles and scores produced by one run.
#[derive(Debug, Clone)]
pub struct MatchRun {
    pub profiles: ProfileSet,
    pub scores: ScoreMatrix,
}

/// Runs profile building followed by pairwise scoring.
#[derive(Debug, Clone, Default)]
pub struct MatchmakingService {
    scoring: ScoringConfig,
}

impl MatchmakingService {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    pub fn run(&self, directory: &UserDirectory) -> MatchRun {
        tracing::info!("Building user profiles...");
        let profiles = build_profiles(directory);

        tracing::info!(
            "Computing matching scores... (users={}, precision={})",
            profiles.len(),
            self.scoring.precision
        );
        let mut scores = compute_match_scores(&profiles, self.scoring.precision);

        if self.scoring.min_score > 0.0 {
            let before = scores.len();
            scores = scores.filter_min_score(self.scoring.min_score);
            tracing::debug!(
                "Dropped {} entries below min score {}",
                before - scores.len(),
                self.scoring.min_score
            );
        }

        tracing::info!("Generated {} score entries", scores.len());
        MatchRun { profiles, scores }
    }

    /// Ranked matches for one user, optionally truncated to `limit`.
    pub fn top_matches(
        &self,
        run: &MatchRun,
        user: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ScoreEntry>> {
        if !run.profiles.contains_key(user) {
            return Err(MatchError::NotFound(format!("no profile for user '{user}'")));
        }

        let mut matches = run.scores.matches_for(user);
        if let Some(limit) = limit {
            matches.truncate(limit);
        }
        Ok(matches)
    }
}
