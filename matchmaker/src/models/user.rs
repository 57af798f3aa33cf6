use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{MatchError, Result};

/// Opaque user identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Input bundle for one run: a memo per user plus optional task histories.
///
/// The memo collection decides which users exist. Task histories keyed by a
/// user without a memo are carried along but never scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDirectory {
    pub memos: BTreeMap<UserId, String>,
    #[serde(default)]
    pub task_histories: BTreeMap<UserId, Vec<String>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memo(mut self, user: impl Into<UserId>, memo: impl Into<String>) -> Self {
        self.memos.insert(user.into(), memo.into());
        self
    }

    pub fn with_tasks<I, S>(mut self, user: impl Into<UserId>, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.task_histories
            .entry(user.into())
            .or_default()
            .extend(tasks.into_iter().map(Into::into));
        self
    }

    /// Task entries recorded for `user`, empty when there is no history.
    pub fn tasks_for(&self, user: &UserId) -> &[String] {
        self.task_histories
            .get(user)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Users that have a task history but no memo.
    pub fn users_without_memo(&self) -> impl Iterator<Item = &UserId> {
        self.task_histories
            .keys()
            .filter(|user| !self.memos.contains_key(*user))
    }

    /// Parse a directory from its JSON form:
    /// `{"memos": {"id": "text"}, "task_histories": {"id": ["task"]}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let directory: Self = serde_json::from_str(json)?;
        directory.validate()?;
        Ok(directory)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<()> {
        let blank = self
            .memos
            .keys()
            .chain(self.task_histories.keys())
            .any(|user| user.as_str().trim().is_empty());

        if blank {
            return Err(MatchError::Validation("user ids must not be empty".to_string()));
        }
        Ok(())
    }
}
