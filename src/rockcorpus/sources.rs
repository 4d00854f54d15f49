use std::fs;
use std::path::Path;

use super::types::{ConvertError, SongIndex, SongInfo};

const COLUMNS: usize = 3;

/// Load the audio sources index mapping song name to artist and album.
///
/// The file is strictly tab separated, since artist and album names contain
/// spaces. A song name listed more than once keeps the last row seen. A
/// missing index file fails the whole batch rather than one song.
pub fn load_song_index(path: &Path) -> Result<SongIndex, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::MissingReferenceFile(
            path.display().to_string(),
        ));
    }

    let text = fs::read_to_string(path)?;
    let mut songs = SongIndex::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() != COLUMNS {
            return Err(ConvertError::MalformedInput(format!(
                "line {}: expected {} tab-separated columns, found {}",
                idx + 1,
                COLUMNS,
                cols.len()
            )));
        }
        songs.insert(
            cols[0].trim().to_string(),
            SongInfo {
                artist: cols[1].trim().to_string(),
                album: cols[2].trim().to_string(),
            },
        );
    }

    Ok(songs)
}
