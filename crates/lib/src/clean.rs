//! # Response Cleaning
//!
//! Normalizes raw model output into presentable text. The pipeline is an
//! ordered list of regex rewrites; order matters because later rules operate
//! on the output of earlier ones (the bare-tag rule, for example, must not
//! run before the paired thinking/reasoning blocks are removed, or it would
//! strip the delimiters and leave their contents behind).
//!
//! Every function here is total: bad input degrades to best-effort output,
//! never an error.

use regex::Regex;
use std::sync::LazyLock;

/// The ordered tag- and filler-stripping rules.
///
/// 1. `<thinking>...</thinking>` blocks, case-insensitive, spanning newlines.
/// 2. `<reasoning>...</reasoning>` blocks, same semantics.
/// 3. Any remaining bare `<word>` or `</word>` markup.
/// 4. One leading filler phrase ("Here is/are/'s", "Based on",
///    "The answer is", "In summary") with its trailing colon/whitespace.
static STRIP_RULES: LazyLock<Vec<(Regex, &str)>> = LazyLock::new(|| {
    [
        r"(?is)<thinking>.*?</thinking>",
        r"(?is)<reasoning>.*?</reasoning>",
        r"(?i)</?[a-z_]+>",
        r"(?i)^(here( is| are|['\u{2019}]s)|based on|the answer is|in summary)[:\s]*",
    ]
    .into_iter()
    // Patterns are compile-time constants; compilation cannot fail at runtime.
    .map(|pattern| (Regex::new(pattern).unwrap(), ""))
    .collect()
});

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Applies the strip rules only, preserving line structure.
///
/// Used where downstream parsing is line-oriented (quiz segmentation) and
/// the whitespace collapse of [`clean_response`] would erase the structure
/// being parsed.
pub fn strip_markup(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (pattern, replacement) in STRIP_RULES.iter() {
        cleaned = pattern.replace_all(&cleaned, *replacement).into_owned();
    }
    cleaned
}

/// Cleans raw model output into presentable text.
///
/// Strips reasoning artifacts and leading filler, collapses all whitespace
/// runs (including newlines) to single spaces, trims, and capitalizes a
/// lowercase first character. Idempotent on its own output.
pub fn clean_response(text: &str) -> String {
    let stripped = strip_markup(text);
    let collapsed = WHITESPACE_RUNS.replace_all(&stripped, " ");
    let trimmed = collapsed.trim();
    capitalize_first(trimmed)
}

/// Uppercases the first character when it is lowercase.
///
/// Purely literal casing for sentence-initial presentation; no attempt to
/// guess intent beyond that.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            first.to_uppercase().collect::<String>() + chars.as_str()
        }
        _ => text.to_string(),
    }
}
