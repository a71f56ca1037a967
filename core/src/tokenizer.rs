use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STRIP: Regex = Regex::new(r"[^a-z0-9\s]").expect("valid regex");
}

/// Tokenize text into lower-cased ASCII alphanumeric words, in order.
///
/// Everything outside `[a-z0-9]` and whitespace is removed before splitting, so
/// "don't" becomes "dont" and "rock-n-roll" becomes "rocknroll". No stemming and
/// no stop-word removal.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = STRIP.replace_all(&lowered, "");
    stripped.split_whitespace().map(str::to_string).collect()
}
