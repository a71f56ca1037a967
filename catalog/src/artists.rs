use crate::{json_files, load_json};
use serde::Deserialize;
use std::path::Path;

fn unknown_artist() -> String { "Unknown Artist".to_string() }

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: String,
    #[serde(default = "unknown_artist")]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// How much of an album's `release_date` is meaningful. Null and unrecognised
/// values read as `Day`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum DatePrecision {
    Year,
    Month,
    #[default]
    Day,
}

impl From<Option<String>> for DatePrecision {
    fn from(s: Option<String>) -> Self {
        match s.as_deref() {
            Some("year") => DatePrecision::Year,
            Some("month") => DatePrecision::Month,
            _ => DatePrecision::Day,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumArtist {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub release_date_precision: DatePrecision,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Deserialize)]
struct AlbumFile {
    #[serde(default)]
    items: Vec<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
}

#[derive(Debug, Deserialize)]
struct TopTracksFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

pub fn read_all_artists(dir: &Path) -> Vec<Artist> {
    json_files(dir).iter().filter_map(|p| load_json::<Artist>(p)).collect()
}

/// Case-insensitive exact name match. When several records share a name the
/// one from the last file wins.
pub fn find_artist_by_name<'a>(artists: &'a [Artist], name: &str) -> Option<&'a Artist> {
    let wanted = name.to_lowercase();
    artists.iter().rev().find(|a| a.name.to_lowercase() == wanted)
}

/// `None` when the artist has no album file or it cannot be parsed.
pub fn albums_for(dir: &Path, artist_id: &str) -> Option<Vec<Album>> {
    let path = dir.join(format!("{artist_id}.json"));
    if !path.exists() { return None; }
    load_json::<AlbumFile>(&path).map(|f| f.items)
}

pub fn top_tracks_for(dir: &Path, artist_id: &str) -> Option<Vec<Track>> {
    let path = dir.join(format!("{artist_id}.json"));
    if !path.exists() { return None; }
    load_json::<TopTracksFile>(&path).map(|f| f.tracks)
}

pub fn popularity_message(popularity: u32) -> &'static str {
    match popularity {
        0..=30 => "No one knows this song.",
        31..=50 => "Popular song.",
        51..=70 => "It is quite popular now!",
        _ => "It is made for the charts!",
    }
}

/// `(album name, artist label)` for every album whose release date starts with
/// `year`, sorted by album name.
///
/// The label prefers the first credited artist that is also in `known`, then
/// the first credited artist, then "Unknown Artist".
pub fn albums_released_in(dir: &Path, year: &str, known: &[String]) -> Vec<(String, String)> {
    let mut matching = Vec::new();
    for path in json_files(dir) {
        let Some(file) = load_json::<AlbumFile>(&path) else { continue };
        for album in file.items {
            if album.release_date.is_empty() || album.release_date.get(..4) != Some(year) {
                continue;
            }
            let credited = || album.artists.iter().map(|a| a.name.trim());
            let artist = credited()
                .find(|name| known.iter().any(|k| k.as_str() == *name))
                .or_else(|| credited().next())
                .unwrap_or("Unknown Artist")
                .to_string();
            matching.push((album.name.trim().to_string(), artist));
        }
    }
    matching.sort_by(|a, b| a.0.cmp(&b.0));
    matching
}
