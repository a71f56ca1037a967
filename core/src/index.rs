use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Title = String;

/// One song as supplied by the catalog. Titles are unique within a scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>, artist: Option<&str>, lyrics: Option<&str>) -> Self {
        Self {
            title: title.into(),
            artist: artist.map(str::to_string),
            lyrics: lyrics.map(str::to_string),
        }
    }

    /// Lyrics text, or `None` when absent or empty.
    pub fn lyrics_text(&self) -> Option<&str> {
        self.lyrics.as_deref().filter(|l| !l.is_empty())
    }
}

/// Token -> titles whose lyrics contain it. Each bucket keeps first-seen order
/// and never holds the same title twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    pub postings: BTreeMap<String, Vec<Title>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Scan the catalog once. Entries without a title or lyrics are skipped.
    ///
    /// Titles are expected to be unique across `entries`, so a title can only
    /// already be in a bucket as its last element.
    pub fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        let mut index = Self::new();
        for entry in entries {
            if entry.title.is_empty() { continue; }
            let Some(lyrics) = entry.lyrics_text() else { continue };
            for token in tokenize(lyrics) {
                let bucket = index.postings.entry(token).or_default();
                if bucket.last() != Some(&entry.title) {
                    bucket.push(entry.title.clone());
                }
            }
        }
        index
    }

    pub fn titles_for(&self, token: &str) -> Option<&[Title]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    pub fn num_tokens(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }
}
