use crate::dates::format_long_date;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use time::{Date, Month};

/// Weather rows keyed by `(city_code, "YYYY-MM-DD")`.
pub type WeatherLookup = HashMap<(String, String), Weather>;

#[derive(Debug, Clone, PartialEq)]
pub struct Concert {
    pub artist: String,
    pub city_code: String,
    /// Zero-padded "YYYY-MM-DD", the join key into the weather file.
    pub date_key: String,
    /// `None` when the numbers do not form a real calendar day.
    pub date: Option<Date>,
}

impl Concert {
    pub fn new(artist: impl Into<String>, city_code: impl Into<String>, year: u32, month: u32, day: u32) -> Self {
        let date = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .zip(u8::try_from(day).ok())
            .and_then(|(m, d)| Date::from_calendar_date(i32::try_from(year).ok()?, m, d).ok());
        Self {
            artist: artist.into(),
            city_code: city_code.into(),
            date_key: format!("{year:04}-{month:02}-{day:02}"),
            date,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConcertRow {
    artist: String,
    city_code: String,
    month: String,
    day: String,
    year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Weather {
    pub precipitation: String,
    pub date: String,
    pub city: String,
    pub city_code: String,
    pub temperature_avg: String,
    pub temperature_max: String,
    pub temperature_min: String,
    pub wind_direction: String,
    pub wind_speed: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcertForecast {
    pub concert: Concert,
    /// City name and advisory, when weather exists for that city and day.
    pub weather: Option<(String, String)>,
}

impl ConcertForecast {
    pub fn describe(&self) -> String {
        match &self.weather {
            Some((city, message)) => {
                let when = self.concert.date.map_or_else(|| self.concert.date_key.clone(), format_long_date);
                format!("{city}, {when}. {message}")
            }
            None => format!("{}, {}. Weather data not available.", self.concert.city_code, self.concert.date_key),
        }
    }
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn csv_reader(path: &Path) -> Option<csv::Reader<std::fs::File>> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "csv file is missing");
        return None;
    }
    match csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_path(path) {
        Ok(r) => Some(r),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not open csv");
            None
        }
    }
}

/// Concerts with every field present and numeric date parts. Other rows, and
/// rows the reader cannot decode, are logged and skipped.
pub fn read_concerts(path: &Path) -> Vec<Concert> {
    let Some(mut reader) = csv_reader(path) else { return Vec::new() };
    let mut concerts = Vec::new();
    for row in reader.deserialize::<ConcertRow>() {
        let row = match row {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable concerts row");
                continue;
            }
        };
        if row.artist.is_empty() || row.city_code.is_empty() { continue; }
        let (Some(year), Some(month), Some(day)) = (digits(&row.year), digits(&row.month), digits(&row.day)) else {
            continue;
        };
        concerts.push(Concert::new(row.artist, row.city_code, year, month, day));
    }
    concerts
}

pub fn read_weather(path: &Path) -> WeatherLookup {
    let Some(mut reader) = csv_reader(path) else { return WeatherLookup::new() };
    let mut lookup = WeatherLookup::new();
    for row in reader.deserialize::<Weather>() {
        let row = match row {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable weather row");
                continue;
            }
        };
        if row.city_code.is_empty() || row.date.is_empty() { continue; }
        lookup.insert((row.city_code.clone(), row.date.clone()), row);
    }
    lookup
}

/// Sorted, distinct artist names with an upcoming concert.
pub fn upcoming_artists(concerts: &[Concert]) -> Vec<String> {
    concerts.iter().map(|c| c.artist.clone()).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Advice for one day's weather. Empty or non-numeric readings give "No data.".
pub fn forecast_message(weather: &Weather) -> String {
    let parse = |s: &str| s.trim().parse::<f64>().ok();
    let (Some(precipitation), Some(temp_min), Some(wind_speed)) = (
        parse(&weather.precipitation),
        parse(&weather.temperature_min),
        parse(&weather.wind_speed),
    ) else {
        return "No data.".to_string();
    };

    let mut messages = Vec::new();
    if temp_min <= 10.0 {
        messages.push("Wear warm clothes.");
    }
    if precipitation >= 2.3 {
        messages.push(if wind_speed < 15.0 { "Bring an umbrella." } else { "Bring a raincoat." });
    }
    if temp_min > 10.0 && precipitation < 2.3 {
        messages.push("Perfect weather!");
    }
    messages.join(" ")
}

/// Concerts for `artist` (case-insensitive) joined with their day's weather.
pub fn forecasts_for(artist: &str, concerts: &[Concert], weather: &WeatherLookup) -> Vec<ConcertForecast> {
    let wanted = artist.to_lowercase();
    concerts
        .iter()
        .filter(|c| c.artist.to_lowercase() == wanted)
        .map(|c| ConcertForecast {
            concert: c.clone(),
            weather: weather
                .get(&(c.city_code.clone(), c.date_key.clone()))
                .map(|w| (w.city.clone(), forecast_message(w))),
        })
        .collect()
}
