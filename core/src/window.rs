use std::collections::HashMap;

/// Length of the longest contiguous run of tokens with no repeats.
pub fn longest_unique_run<S: AsRef<str>>(tokens: &[S]) -> usize {
    let mut last_seen: HashMap<&str, usize> = HashMap::new();
    let mut start = 0usize;
    let mut best = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if let Some(&j) = last_seen.get(token) {
            if j >= start {
                start = j + 1;
            }
        }
        last_seen.insert(token, i);
        best = best.max(i - start + 1);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn repeated_prefix_moves_window() {
        assert_eq!(longest_unique_run(&tokenize("a b a c b")), 3);
    }

    #[test]
    fn empty_is_zero() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(longest_unique_run(&empty), 0);
    }

    #[test]
    fn identical_and_distinct() {
        assert_eq!(longest_unique_run(&["x", "x", "x"]), 1);
        assert_eq!(longest_unique_run(&["one", "two", "three", "four"]), 4);
    }

    #[test]
    fn stale_occurrence_before_window_is_ignored() {
        // the second "a" was last seen before the window restarted at index 2
        assert_eq!(longest_unique_run(&["a", "b", "b", "a", "c"]), 3);
    }
}
