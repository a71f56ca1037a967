use crate::{json_files, load_json};
use mooziq_core::CatalogEntry;
use std::collections::HashSet;
use std::path::Path;

/// One entry per distinct title, in file-name order. The first file wins when
/// two records share a title.
pub fn scan_songs(dir: &Path) -> Vec<CatalogEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut songs = Vec::new();
    for path in json_files(dir) {
        let Some(entry) = load_json::<CatalogEntry>(&path) else { continue };
        if seen.insert(entry.title.clone()) {
            songs.push(entry);
        }
    }
    tracing::debug!(dir = %dir.display(), count = songs.len(), "scanned songs");
    songs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sorted_and_deduplicated_by_title() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.json"), r#"{"title": "Two", "artist": "X", "lyrics": "second"}"#).unwrap();
        fs::write(dir.path().join("a.json"), r#"{"title": "One", "lyrics": "first"}"#).unwrap();
        fs::write(dir.path().join("c.json"), r#"{"title": "One", "lyrics": "duplicate"}"#).unwrap();
        fs::write(dir.path().join("d.json"), "not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let songs = scan_songs(dir.path());
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        assert_eq!(songs[0].lyrics.as_deref(), Some("first"));
        assert_eq!(songs[0].artist, None);
        assert_eq!(songs[1].artist.as_deref(), Some("X"));
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        assert!(scan_songs(&dir.path().join("nope")).is_empty());
    }
}
