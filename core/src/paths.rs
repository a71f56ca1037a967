use std::path::{Path, PathBuf};

/// File locations for one dataset, resolved once and handed to every component.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub root: PathBuf,
    pub moosified_dir: PathBuf,
    pub index_snapshot: PathBuf,
}

impl DataPaths {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(root: P, moosified_dir: Q) -> Self {
        let root = root.as_ref().to_path_buf();
        let index_snapshot = root.join("inverted_index.json");
        Self { root, moosified_dir: moosified_dir.as_ref().to_path_buf(), index_snapshot }
    }

    pub fn with_index_snapshot<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.index_snapshot = path.as_ref().to_path_buf();
        self
    }

    pub fn songs_dir(&self) -> PathBuf { self.root.join("songs") }
    pub fn artists_dir(&self) -> PathBuf { self.root.join("artists") }
    pub fn albums_dir(&self) -> PathBuf { self.root.join("albums") }
    pub fn top_tracks_dir(&self) -> PathBuf { self.root.join("top_tracks") }
    pub fn artist_data_csv(&self) -> PathBuf { self.root.join("artist-data.csv") }
    pub fn concerts_csv(&self) -> PathBuf { self.root.join("concerts").join("concerts.csv") }
    pub fn weather_csv(&self) -> PathBuf { self.root.join("weather").join("weather.csv") }
}
