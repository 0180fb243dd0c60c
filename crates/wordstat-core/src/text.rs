//! Word extraction.

/// Split text into words.
///
/// Words are whitespace-separated runs with surrounding punctuation removed.
/// Apostrophes and hyphens survive inside a word (`don't`, `well-known`), and
/// case is left alone since folding is the statistics engine's job.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}
