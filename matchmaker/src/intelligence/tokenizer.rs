use regex::Regex;
use std::sync::LazyLock;

use crate::models::TokenSet;

// Applied after lowercasing, so uppercase letters are already folded.
static NON_TOKEN_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9\s\x1C-\x1F]").expect("static token pattern is valid")
});

/// Word separators: Unicode White_Space plus the ASCII information
/// separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Normalize free text into a set of tokens.
///
/// Lowercases the text, strips every character outside `a-z`, `0-9` and
/// whitespace, then splits on whitespace runs. The file, group, record and
/// unit separators (U+001C..=U+001F) count as whitespace. Total over all
/// inputs: an empty or punctuation-only string yields an empty set.
pub fn tokenize(text: &str) -> TokenSet {
    let lowered = text.to_lowercase();
    NON_TOKEN_CHARS
        .replace_all(&lowered, "")
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Union of the tokens of every text in `texts`.
pub fn tokenize_all<I, S>(texts: I) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .flat_map(|text| tokenize(text.as_ref()))
        .collect()
}
