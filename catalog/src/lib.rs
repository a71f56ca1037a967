//! Read-only access to the on-disk music dataset, plus the artist CSV export.
//!
//! Every directory scan is filename-sorted and tolerant: missing directories
//! and unreadable records are logged and skipped, never fatal.

pub mod artists;
pub mod concerts;
pub mod dates;
pub mod export;
pub mod songs;

use mooziq_core::{CatalogEntry, DataPaths};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use artists::{Album, Artist, DatePrecision, Track};
pub use concerts::{Concert, ConcertForecast, Weather};
pub use export::{ArtistRow, ExportOutcome};

pub struct Catalog {
    paths: DataPaths,
}

impl Catalog {
    pub fn new(paths: DataPaths) -> Self { Self { paths } }

    pub fn paths(&self) -> &DataPaths { &self.paths }

    pub fn songs(&self) -> Vec<CatalogEntry> { songs::scan_songs(&self.paths.songs_dir()) }

    pub fn artists(&self) -> Vec<Artist> { artists::read_all_artists(&self.paths.artists_dir()) }

    pub fn find_artist(&self, name: &str) -> Option<Artist> {
        artists::find_artist_by_name(&self.artists(), name).cloned()
    }

    pub fn albums(&self, artist: &Artist) -> Option<Vec<Album>> {
        artists::albums_for(&self.paths.albums_dir(), &artist.id)
    }

    pub fn top_tracks(&self, artist: &Artist) -> Option<Vec<Track>> {
        artists::top_tracks_for(&self.paths.top_tracks_dir(), &artist.id)
    }

    pub fn albums_released_in(&self, year: &str) -> Vec<(String, String)> {
        let known: Vec<String> = self.artists().into_iter().map(|a| a.name).collect();
        artists::albums_released_in(&self.paths.albums_dir(), year, &known)
    }

    pub fn export_artist(&self, artist: &Artist) -> anyhow::Result<(ArtistRow, ExportOutcome)> {
        export::export_artist(&self.paths, artist)
    }

    pub fn concerts(&self) -> Vec<Concert> { concerts::read_concerts(&self.paths.concerts_csv()) }

    pub fn weather(&self) -> concerts::WeatherLookup { concerts::read_weather(&self.paths.weather_csv()) }
}

/// `.json` files directly inside `dir`, sorted by file name.
pub(crate) fn json_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "directory not found");
        return Vec::new();
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect()
}

/// Parse one JSON record, logging and returning `None` on any failure.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "file not found");
            return None;
        }
    };
    match serde_json::from_reader(BufReader::new(f)) {
        Ok(v) => Some(v),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid JSON");
            None
        }
    }
}
