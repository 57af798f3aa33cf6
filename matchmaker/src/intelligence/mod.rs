pub mod profile;
pub mod similarity;
pub mod tokenizer;

pub use profile::build_profiles;
pub use similarity::{compute_match_scores, jaccard, round_score, DEFAULT_PRECISION};
pub use tokenizer::tokenize;
