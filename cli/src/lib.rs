use anyhow::Result;
use catalog::artists::popularity_message;
use catalog::concerts::{forecasts_for, upcoming_artists};
use catalog::dates::format_release_date;
use catalog::{Artist, Catalog, ExportOutcome};
use mooziq_core::moosify::{is_transformable, transform, write_moosified};
use mooziq_core::persist::load_or_build;
use mooziq_core::tokenizer::tokenize;
use mooziq_core::window::longest_unique_run;
use mooziq_core::{query_tokens, rank, CatalogEntry};
use std::io::{BufRead, Write};

const MENU: &[&str] = &[
    "1. Get All Artists",
    "2. Get All Albums By An Artist",
    "3. Get Top Tracks By An Artist",
    "4. Export Artist Data",
    "5. Get Released Albums By Year",
    "6. Analyze Song Lyrics",
    "7. Calculate Longest Unique Word Sequence In A Song",
    "8. Weather Forecast For Upcoming Concerts",
    "9. Search Song By Lyrics",
    "10. Exit",
];

const EXIT: u32 = 10;

const MOOSE: &str = r" ___            ___
/   \          /   \
\_   \        /  __/
 _\   \      /  /__
 \___  \____/   __/
     \_       _/
       | @ @  \__
       |
     _/     /\
    /o)  (o/\ \__
    \_____/ /
      \____/
";

/// The interactive console. Reads answers from `input` and writes everything
/// the user sees to `out`.
pub struct App<R, W> {
    catalog: Catalog,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(catalog: Catalog, input: R, out: W) -> Self {
        Self { catalog, input, out }
    }

    /// Show the menu until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to Mooziq!")?;
        writeln!(self.out, "Choose one of the options bellow:\n")?;
        loop {
            for line in MENU {
                writeln!(self.out, "{line}")?;
            }
            writeln!(self.out)?;
            let Some(choice) = self.prompt("Type your option: ")? else { return Ok(()) };
            match parse_number(&choice) {
                Some(EXIT) => {
                    writeln!(self.out, "Thank you for using Mooziq! Have a nice day :)")?;
                    return Ok(());
                }
                Some(option @ 1..=9) => self.dispatch(option)?,
                _ => writeln!(self.out, "Error - Invalid option. Please input a number between 1 and 10.")?,
            }
        }
    }

    pub fn dispatch(&mut self, option: u32) -> Result<()> {
        match option {
            1 => self.list_artists(),
            2 => self.albums_by_artist(),
            3 => self.top_tracks_by_artist(),
            4 => self.export_artist_data(),
            5 => self.albums_by_year(),
            6 => self.moosify_song(),
            7 => self.longest_unique_sequence(),
            8 => self.concert_forecasts(),
            9 => self.search_lyrics(),
            _ => Ok(()),
        }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_artist_names(&mut self, artists: &[Artist]) -> Result<()> {
        if artists.is_empty() {
            writeln!(self.out, "No artists found in the database.")?;
        }
        for a in artists {
            writeln!(self.out, "- {}", a.name)?;
        }
        Ok(())
    }

    /// List artists, ask for one and look it up. `None` when the name is unknown
    /// (already reported) or input ended.
    fn choose_artist(&mut self) -> Result<Option<Artist>> {
        let artists = self.catalog.artists();
        self.print_artist_names(&artists)?;
        let Some(name) = self.prompt("Please input the name of one of the following artists: ")? else {
            return Ok(None);
        };
        let found = catalog::artists::find_artist_by_name(&artists, &name).cloned();
        if found.is_none() {
            writeln!(self.out, "Artist '{name}' not found.")?;
        }
        Ok(found)
    }

    fn list_artists(&mut self) -> Result<()> {
        let artists = self.catalog.artists();
        if artists.is_empty() {
            writeln!(self.out, "No artists found in the database.")?;
            return Ok(());
        }
        writeln!(self.out, "\nArtists found in the database:")?;
        self.print_artist_names(&artists)
    }

    fn albums_by_artist(&mut self) -> Result<()> {
        let Some(artist) = self.choose_artist()? else { return Ok(()) };
        match self.catalog.albums(&artist) {
            Some(albums) => {
                writeln!(self.out, "Listing all available albums from {}...", artist.name)?;
                for album in albums {
                    let date = format_release_date(&album.release_date, album.release_date_precision);
                    writeln!(self.out, "- \"{}\" was released in {date}.", album.name)?;
                }
            }
            None => writeln!(self.out, "No albums found for artist '{}'.", artist.name)?,
        }
        Ok(())
    }

    fn top_tracks_by_artist(&mut self) -> Result<()> {
        let Some(artist) = self.choose_artist()? else { return Ok(()) };
        let tracks = match self.catalog.top_tracks(&artist) {
            Some(tracks) => tracks,
            None => {
                writeln!(self.out, "No top tracks found for artist '{}'.", artist.name)?;
                return Ok(());
            }
        };
        writeln!(self.out, "Listing top tracks for {}...", artist.name)?;
        for track in tracks {
            writeln!(
                self.out,
                "- \"{}\" has a popularity score of {}. {}",
                track.name,
                track.popularity,
                popularity_message(track.popularity)
            )?;
        }
        Ok(())
    }

    fn export_artist_data(&mut self) -> Result<()> {
        if self.catalog.artists().is_empty() {
            writeln!(self.out, "No artists found in the database.")?;
            return Ok(());
        }
        let Some(artist) = self.choose_artist()? else { return Ok(()) };
        writeln!(self.out, "Exporting \"{}\" data to CSV file...", artist.name)?;
        match self.catalog.export_artist(&artist) {
            Ok((_, ExportOutcome::Updated)) => writeln!(self.out, "Data successfully updated.")?,
            Ok((_, ExportOutcome::Appended)) => writeln!(self.out, "Data successfully appended.")?,
            Err(err) => writeln!(self.out, "Error writing to CSV file: {err:#}")?,
        }
        Ok(())
    }

    fn albums_by_year(&mut self) -> Result<()> {
        let Some(year) = self.prompt("Please enter a year: ")? else { return Ok(()) };
        if parse_number(&year).is_none() {
            writeln!(self.out, "Invalid year. Please enter a numeric value.")?;
            return Ok(());
        }
        let albums = self.catalog.albums_released_in(&year);
        if albums.is_empty() {
            writeln!(self.out, "No albums were released in the year {year}.")?;
            return Ok(());
        }
        writeln!(self.out, "Albums released in the year {year}:")?;
        for (name, artist) in albums {
            writeln!(self.out, "- \"{name}\" by {artist}.")?;
        }
        Ok(())
    }

    /// List songs and read a 1-based pick. `None` when there is nothing to pick
    /// or the pick was invalid (already reported).
    fn choose_song(&mut self) -> Result<Option<CatalogEntry>> {
        let mut songs = self.catalog.songs();
        if songs.is_empty() {
            writeln!(self.out, "No songs available.")?;
            return Ok(None);
        }
        writeln!(self.out, "Available songs:")?;
        for (i, song) in songs.iter().enumerate() {
            writeln!(self.out, "{}. {} by {}", i + 1, song.title, artist_label(song))?;
        }
        let Some(choice) = self.prompt("Please select one of the following songs (number): ")? else {
            return Ok(None);
        };
        match parse_number(&choice).map(|n| n as usize) {
            Some(n) if (1..=songs.len()).contains(&n) => Ok(Some(songs.swap_remove(n - 1))),
            _ => {
                writeln!(self.out, "Invalid choice.")?;
                Ok(None)
            }
        }
    }

    fn moosify_song(&mut self) -> Result<()> {
        let Some(song) = self.choose_song()? else { return Ok(()) };
        let artist = artist_label(&song);
        let Some(lyrics) = song.lyrics_text() else {
            writeln!(self.out, "{} has no lyrics available.", song.title)?;
            return Ok(());
        };
        if !is_transformable(lyrics) {
            writeln!(self.out, "{} by {artist} is not moose-compatible!", song.title)?;
            return Ok(());
        }
        let moosified = transform(lyrics);
        match write_moosified(&self.catalog.paths().moosified_dir, &song.title, &moosified) {
            Ok(path) => {
                writeln!(self.out, "{} by {artist} has been moos-ified!", song.title)?;
                writeln!(self.out, "File saved at {}", path.display())?;
                write!(self.out, "{MOOSE}")?;
            }
            Err(err) => writeln!(self.out, "Error: could not save moosified lyrics: {err:#}")?,
        }
        Ok(())
    }

    fn longest_unique_sequence(&mut self) -> Result<()> {
        let Some(song) = self.choose_song()? else { return Ok(()) };
        let Some(lyrics) = song.lyrics_text() else {
            writeln!(self.out, "No lyrics found for this song.")?;
            return Ok(());
        };
        let words = tokenize(lyrics);
        if words.is_empty() {
            writeln!(self.out, "No valid words found in the lyrics.")?;
            return Ok(());
        }
        writeln!(
            self.out,
            "The length of the longest unique sequence in {} is {}",
            song.title,
            longest_unique_run(&words)
        )?;
        Ok(())
    }

    fn concert_forecasts(&mut self) -> Result<()> {
        let concerts = self.catalog.concerts();
        let weather = self.catalog.weather();
        if concerts.is_empty() {
            writeln!(self.out, "No upcoming concerts found.")?;
            return Ok(());
        }
        let artists = upcoming_artists(&concerts);
        writeln!(self.out, "Upcoming artists:")?;
        for a in &artists {
            writeln!(self.out, "- {a}")?;
        }
        let Some(wanted) = self.prompt("Please input the name of one of the following artists: ")? else {
            return Ok(());
        };
        let forecasts = forecasts_for(&wanted, &concerts, &weather);
        if forecasts.is_empty() {
            writeln!(self.out, "No upcoming concerts found for '{wanted}'.")?;
            return Ok(());
        }
        let name = artists
            .iter()
            .find(|a| a.to_lowercase() == wanted.to_lowercase())
            .cloned()
            .unwrap_or(wanted);
        let noun = if forecasts.len() == 1 { "concert" } else { "concerts" };
        writeln!(self.out, "Fetching weather forecast for \"{name}\" concerts...")?;
        writeln!(self.out, "{name} has {} upcoming {noun}:", forecasts.len())?;
        for f in &forecasts {
            writeln!(self.out, "- {}", f.describe())?;
        }
        Ok(())
    }

    fn search_lyrics(&mut self) -> Result<()> {
        let Some(query) = self.prompt("Please type the lyrics you'd like to search for: ")? else {
            return Ok(());
        };
        let tokens = match query_tokens(&query) {
            Ok(tokens) => tokens,
            Err(err) => {
                writeln!(self.out, "{err}")?;
                return Ok(());
            }
        };
        let index = load_or_build(&self.catalog.paths().index_snapshot, || self.catalog.songs());
        let results = rank(&tokens, &index);
        if results.is_empty() {
            writeln!(self.out, "No matches found for '{query}'.")?;
            return Ok(());
        }
        writeln!(self.out, "Listing matches for '{query}'...")?;
        for r in results {
            writeln!(self.out, "- {} with a score of {}", r.title, r.score)?;
        }
        Ok(())
    }
}

fn artist_label(song: &CatalogEntry) -> &str {
    song.artist.as_deref().unwrap_or("Unknown")
}

/// Plain ASCII digits only; signs and whitespace are rejected.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_digits_only() {
        assert_eq!(parse_number("7"), Some(7));
        assert_eq!(parse_number("+7"), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number(""), None);
    }
}
