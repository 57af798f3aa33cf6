mod matchmaking;

pub use matchmaking::{MatchRun, MatchmakingService};
