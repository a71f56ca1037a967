use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};

lazy_static! {
    static ref SHOUTED_WORD: Regex = Regex::new(r"\b\w+[?!]").expect("valid regex");
}

/// Lyrics qualify when they contain "mo" (any case) or a `?` / `!`.
pub fn is_transformable(lyrics: &str) -> bool {
    lyrics.to_lowercase().contains("mo") || lyrics.contains('?') || lyrics.contains('!')
}

/// Every "mo" becomes "moo", then every word ending in `?` or `!` becomes "moo!".
pub fn transform(lyrics: &str) -> String {
    let mooed = lyrics.replace("mo", "moo");
    SHOUTED_WORD.replace_all(&mooed, "moo!").into_owned()
}

pub fn output_file_name(title: &str) -> String {
    format!("{title} Moosified.txt")
}

/// Write transformed lyrics to `<dir>/<title> Moosified.txt`, creating `dir` if
/// needed. The file is written beside its destination and renamed into place,
/// so a failed write leaves nothing behind.
pub fn write_moosified(dir: &Path, title: &str, text: &str) -> Result<PathBuf> {
    create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let dest = dir.join(output_file_name(title));
    let tmp = dir.join(format!(".{}.tmp", output_file_name(title)));
    let written = fs::write(&tmp, text).and_then(|_| fs::rename(&tmp, &dest));
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("writing {}", dest.display()));
    }
    tracing::info!(path = %dest.display(), bytes = text.len(), "wrote moosified lyrics");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn eligibility() {
        assert!(is_transformable("I am so happy?"));
        assert!(is_transformable("no mo here"));
        assert!(is_transformable("MORNING light"));
        assert!(is_transformable("hey!"));
        assert!(!is_transformable("stay calm"));
        assert!(!is_transformable("I will go"));
    }

    #[test]
    fn mo_is_replaced_once_per_occurrence() {
        assert_eq!(transform("mole"), "moole");
        assert_eq!(transform("mouse and momo"), "moouse and moomoo");
        assert_eq!(transform("Mole"), "Mole");
    }

    #[test]
    fn shouted_words_collapse_to_marker() {
        assert_eq!(transform("I go? home!"), "I moo! moo!");
        assert_eq!(transform("more?"), "moo!");
        assert_eq!(transform("wait ?!"), "wait ?!");
    }

    #[test]
    fn writes_into_created_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("moosified");
        let path = write_moosified(&out, "Song", "moo!").unwrap();
        assert_eq!(path, out.join("Song Moosified.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "moo!");
        assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "x").unwrap();
        assert!(write_moosified(&blocker, "Song", "moo!").is_err());
    }
}
