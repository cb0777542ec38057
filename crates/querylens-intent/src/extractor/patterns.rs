use querylens_core::QuestionPatterns;
use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Question pattern {pattern:?} is invalid: {err}"),
    }
}

// The lead word must come before its qualifier.
static WHAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)\b(?:what|which)\b.*\b(?:is|are|does|do)\b"));
static HOW_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)\bhow\b.*\b(?:does|do|works|work)\b"));
static WHERE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)\bwhere\b.*\b(?:is|are)\b"));
static WHY_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bwhy\b"));
static WHEN_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(?:when|during|at what)\b"));

/// Evaluate every question template against the query.
pub fn detect(query: &str) -> QuestionPatterns {
    QuestionPatterns::from_flags(
        WHAT_REGEX.is_match(query),
        HOW_REGEX.is_match(query),
        WHERE_REGEX.is_match(query),
        WHY_REGEX.is_match(query),
        WHEN_REGEX.is_match(query),
    )
}
