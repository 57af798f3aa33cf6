use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::UserId;

/// A normalized word: lowercase ASCII letters and digits only.
pub type Token = String;

pub type TokenSet = BTreeSet<Token>;

/// Union of the tokens found in one user's memo and task history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    tokens: TokenSet,
}

impl Profile {
    pub fn new(tokens: TokenSet) -> Self {
        Self { tokens }
    }

    pub fn token_set(&self) -> &TokenSet {
        &self.tokens
    }

    /// Tokens in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for Profile {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One profile per user, iterated in user id order.
pub type ProfileSet = BTreeMap<UserId, Profile>;
