use crate::models::{Profile, ProfileSet, UserDirectory};

use super::tokenizer::{tokenize, tokenize_all};

/// Build one profile per user in the memo collection.
///
/// A profile is the union of the memo tokens and the tokens of every task
/// entry for that user. Users that only appear in the task histories get no
/// profile and therefore never take part in scoring.
pub fn build_profiles(directory: &UserDirectory) -> ProfileSet {
    for user in directory.users_without_memo() {
        tracing::warn!(
            user = %user,
            "Task history without a memo, user excluded from matching"
        );
    }

    directory
        .memos
        .iter()
        .map(|(user, memo)| {
            let mut tokens = tokenize(memo);
            tokens.extend(tokenize_all(directory.tasks_for(user)));

            tracing::debug!(user = %user, tokens = tokens.len(), "Built profile");
            (user.clone(), Profile::new(tokens))
        })
        .collect()
}
