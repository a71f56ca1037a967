use crate::tokenizer::tokenize;
use crate::InvertedIndex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub score: u32,
}

/// A query that cannot be searched at all, as opposed to one with no matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// Nothing but whitespace was submitted.
    Blank,
    /// Text was submitted but none of it survived tokenization.
    NoTokens,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Blank => f.write_str("Please enter a valid search query."),
            QueryError::NoTokens => f.write_str("Invalid search query."),
        }
    }
}

impl std::error::Error for QueryError {}

/// Tokenize a query, rejecting ones that leave nothing to search for.
pub fn query_tokens(query: &str) -> Result<Vec<String>, QueryError> {
    if query.trim().is_empty() {
        return Err(QueryError::Blank);
    }
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Err(QueryError::NoTokens);
    }
    Ok(tokens)
}

/// Rank titles by how many query tokens hit them.
///
/// Every query token occurrence adds 1 to each title in its bucket, so a token
/// repeated in the query counts twice. Results are sorted by descending score;
/// equal scores keep the order in which titles first received a hit.
pub fn rank<S: AsRef<str>>(q_tokens: &[S], index: &InvertedIndex) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    for token in q_tokens {
        let Some(titles) = index.titles_for(token.as_ref()) else { continue };
        for title in titles {
            let i = *slot.entry(title.as_str()).or_insert_with(|| {
                results.push(SearchResult { title: title.clone(), score: 0 });
                results.len() - 1
            });
            results[i].score += 1;
        }
    }
    // stable: ties stay in first-hit order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

pub fn search(query: &str, index: &InvertedIndex) -> Result<Vec<SearchResult>, QueryError> {
    Ok(rank(&query_tokens(query)?, index))
}
