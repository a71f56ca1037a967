use crate::artists::{albums_for, top_tracks_for, Artist};
use anyhow::{Context, Result};
use mooziq_core::DataPaths;
use serde::{Deserialize, Serialize};
use std::fs::create_dir_all;
use std::path::Path;

/// One row of `artist-data.csv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistRow {
    pub artist_id: String,
    pub artist_name: String,
    pub number_of_albums: String,
    pub top_track_1: String,
    pub top_track_2: String,
    pub genres: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Appended,
    Updated,
}

/// Existing rows, or none when the file does not exist yet.
pub fn read_rows(path: &Path) -> Result<Vec<ArtistRow>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path).with_context(|| format!("reading {}", path.display()))?;
    let mut rows: Vec<ArtistRow> = Vec::new();
    for row in reader.deserialize::<ArtistRow>() {
        rows.push(row.with_context(|| format!("parsing {}", path.display()))?);
    }
    Ok(rows)
}

/// Rewrite the whole file, header included.
pub fn write_rows(path: &Path, rows: &[ArtistRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("writing {}", path.display()))?;
    if rows.is_empty() {
        writer.write_record(["artist_id", "artist_name", "number_of_albums", "top_track_1", "top_track_2", "genres"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Summary row for an artist from its album and top-track files.
pub fn artist_row(paths: &DataPaths, artist: &Artist) -> ArtistRow {
    let num_albums = albums_for(&paths.albums_dir(), &artist.id).map_or(0, |a| a.len());
    let tracks = top_tracks_for(&paths.top_tracks_dir(), &artist.id).unwrap_or_default();
    let track_name = |i: usize| tracks.get(i).map(|t| t.name.clone()).unwrap_or_default();
    ArtistRow {
        artist_id: artist.id.clone(),
        artist_name: artist.name.clone(),
        number_of_albums: num_albums.to_string(),
        top_track_1: track_name(0),
        top_track_2: track_name(1),
        genres: artist.genres.join(", "),
    }
}

/// Upsert the artist's row keyed by `artist_id` and rewrite the CSV.
pub fn export_artist(paths: &DataPaths, artist: &Artist) -> Result<(ArtistRow, ExportOutcome)> {
    let csv_path = paths.artist_data_csv();
    let fresh = artist_row(paths, artist);
    let mut rows = read_rows(&csv_path)?;

    let mut outcome = ExportOutcome::Appended;
    for row in rows.iter_mut().filter(|r| r.artist_id.trim() == artist.id.trim()) {
        *row = ArtistRow { artist_id: row.artist_id.clone(), ..fresh.clone() };
        outcome = ExportOutcome::Updated;
    }
    if outcome == ExportOutcome::Appended {
        rows.push(fresh.clone());
    }

    write_rows(&csv_path, &rows)?;
    tracing::info!(artist_id = %artist.id, ?outcome, rows = rows.len(), "exported artist data");
    Ok((fresh, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn header_only_file_for_no_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("artist-data.csv");
        write_rows(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "artist_id,artist_name,number_of_albums,top_track_1,top_track_2,genres\n");
        assert!(read_rows(&path).unwrap().is_empty());
    }

    #[test]
    fn rows_with_commas_survive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("artist-data.csv");
        let row = ArtistRow {
            artist_id: "1".into(),
            artist_name: "Crosby, Stills".into(),
            number_of_albums: "3".into(),
            genres: "folk, rock".into(),
            ..Default::default()
        };
        write_rows(&path, std::slice::from_ref(&row)).unwrap();
        assert_eq!(read_rows(&path).unwrap(), vec![row]);
    }
}
