use catalog::concerts::{forecasts_for, upcoming_artists};
use catalog::{Catalog, ExportOutcome};
use mooziq_core::DataPaths;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn build_tiny_dataset(root: &Path) {
    write(root, "artists/1.json", r#"{"id": "q1", "name": "Queen", "genres": ["rock", "glam rock"]}"#);
    write(root, "artists/2.json", r#"{"id": "a2", "name": "ABBA", "genres": []}"#);
    write(
        root,
        "albums/q1.json",
        r#"{"items": [
            {"name": "A Night at the Opera", "release_date": "1975-11-21", "release_date_precision": "day", "artists": [{"name": "Queen"}]},
            {"name": "Jazz", "release_date": "1978-11", "release_date_precision": "month", "artists": [{"name": "Queen"}]}
        ]}"#,
    );
    write(
        root,
        "top_tracks/q1.json",
        r#"{"tracks": [{"name": "Bohemian Rhapsody", "popularity": 88}, {"name": "Don't Stop Me Now", "popularity": 80}, {"name": "Other", "popularity": 5}]}"#,
    );
    write(
        root,
        "concerts/concerts.csv",
        "artist,city_code,month,day,year\nQueen,LPA,3,7,2025\nQueen,MAD,x,1,2025\nABBA,MAD,12,1,2025\nQueen,BCN,2,30,2025\n",
    );
    write(
        root,
        "weather/weather.csv",
        "precipitation,date,city,city_code,temperature_avg,temperature_max,temperature_min,wind_direction,wind_speed\n\
         3.1,2025-03-07,Las Palmas,LPA,18,21,14,N,22\n",
    );
}

fn catalog(root: &Path) -> Catalog {
    Catalog::new(DataPaths::new(root, root.join("moosified")))
}

#[test]
fn artists_albums_and_tracks() {
    let dir = tempdir().unwrap();
    build_tiny_dataset(dir.path());
    let cat = catalog(dir.path());

    let names: Vec<String> = cat.artists().into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Queen", "ABBA"]);

    let queen = cat.find_artist("queen").unwrap();
    assert_eq!(cat.albums(&queen).unwrap().len(), 2);
    assert_eq!(cat.top_tracks(&queen).unwrap()[0].name, "Bohemian Rhapsody");

    let abba = cat.find_artist("ABBA").unwrap();
    assert!(cat.albums(&abba).is_none());
    assert!(cat.find_artist("Nobody").is_none());

    assert_eq!(cat.albums_released_in("1978"), vec![("Jazz".to_string(), "Queen".to_string())]);
    assert!(cat.albums_released_in("2001").is_empty());
}

#[test]
fn export_appends_then_updates() {
    let dir = tempdir().unwrap();
    build_tiny_dataset(dir.path());
    let cat = catalog(dir.path());
    let queen = cat.find_artist("Queen").unwrap();
    let abba = cat.find_artist("ABBA").unwrap();

    let (row, outcome) = cat.export_artist(&queen).unwrap();
    assert_eq!(outcome, ExportOutcome::Appended);
    assert_eq!(row.number_of_albums, "2");
    assert_eq!(row.top_track_2, "Don't Stop Me Now");
    assert_eq!(row.genres, "rock, glam rock");

    let (_, outcome) = cat.export_artist(&abba).unwrap();
    assert_eq!(outcome, ExportOutcome::Appended);
    let (_, outcome) = cat.export_artist(&queen).unwrap();
    assert_eq!(outcome, ExportOutcome::Updated);

    let rows = catalog::export::read_rows(&dir.path().join("artist-data.csv")).unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.artist_id.as_str()).collect();
    assert_eq!(ids, vec!["q1", "a2"]);
    assert_eq!(rows[1].number_of_albums, "0");
    assert_eq!(rows[1].top_track_1, "");
}

#[test]
fn concerts_join_weather() {
    let dir = tempdir().unwrap();
    build_tiny_dataset(dir.path());
    let cat = catalog(dir.path());

    // the non-numeric month is skipped, the 30th of February is kept as written
    let concerts = cat.concerts();
    assert_eq!(concerts.len(), 3);
    assert_eq!(upcoming_artists(&concerts), vec!["ABBA", "Queen"]);

    let weather = cat.weather();
    let lines: Vec<String> = forecasts_for("QUEEN", &concerts, &weather).iter().map(|f| f.describe()).collect();
    assert_eq!(
        lines,
        vec!["Las Palmas, March 7th 2025. Bring a raincoat.", "BCN, 2025-02-30. Weather data not available."]
    );

    let lines: Vec<String> = forecasts_for("abba", &concerts, &weather).iter().map(|f| f.describe()).collect();
    assert_eq!(lines, vec!["MAD, 2025-12-01. Weather data not available."]);
    assert!(forecasts_for("Nobody", &concerts, &weather).is_empty());
}

#[test]
fn malformed_csv_rows_do_not_hide_later_rows() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "concerts/concerts.csv",
        "artist,city_code,month,day,year\nA,LPA,3,7,2025\nB,MAD,4,1,2025,extra\nD,MAD\nC,BCN,5,2,2025\n",
    );
    write(
        dir.path(),
        "weather/weather.csv",
        "precipitation,date,city,city_code,temperature_avg,temperature_max,temperature_min,wind_direction,wind_speed\n\
         0,2025-03-07,Las Palmas,LPA,18,21,14,N,5,extra\n\
         0,2025-05-02,Barcelona,BCN,20,24,16,E,5\n",
    );
    let cat = catalog(dir.path());

    let concerts = cat.concerts();
    let artists: Vec<&str> = concerts.iter().map(|c| c.artist.as_str()).collect();
    assert_eq!(artists, vec!["A", "B", "C"]);

    let weather = cat.weather();
    assert_eq!(weather.len(), 2);
    let lines: Vec<String> = forecasts_for("C", &concerts, &weather).iter().map(|f| f.describe()).collect();
    assert_eq!(lines, vec!["Barcelona, May 2nd 2025. Perfect weather!"]);
}

#[test]
fn missing_dataset_is_empty_not_fatal() {
    let dir = tempdir().unwrap();
    let cat = catalog(&dir.path().join("absent"));
    assert!(cat.songs().is_empty());
    assert!(cat.artists().is_empty());
    assert!(cat.concerts().is_empty());
    assert!(cat.weather().is_empty());
}
