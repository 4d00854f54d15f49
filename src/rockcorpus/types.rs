use std::collections::HashMap;
use std::path::PathBuf;

use crate::jams::JamsError;

/// Errors that can occur while converting a dataset
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// IO errors when reading annotation files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file or row that does not match the expected shape
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The audio sources index is absent; this aborts the whole batch
    #[error("missing reference file: {0}")]
    MissingReferenceFile(String),

    /// A song with annotation files but no entry in the audio sources index
    #[error("song not in the audio sources index: {0}")]
    UnknownSong(String),

    /// Errors while writing the output document
    #[error("JAMS error: {0}")]
    Jams(#[from] JamsError),
}

/// The three annotation files describing one song.
#[derive(Debug, Clone)]
pub struct SongFiles {
    /// Expanded harmony annotation (.clt)
    pub harmony: PathBuf,
    /// Expanded melody annotation (.nlt)
    pub melody: PathBuf,
    /// Measure timing data
    pub timing: PathBuf,
}

/// Artist and album of one song, from the audio sources index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInfo {
    pub artist: String,
    pub album: String,
}

/// Lookup from song name to [`SongInfo`], loaded once per batch.
pub type SongIndex = HashMap<String, SongInfo>;

/// Resolve an annotator code as used in dataset file names.
pub fn annotator_name(code: &str) -> Option<&'static str> {
    match code {
        "dt" => Some("David Temperley"),
        "tdc" => Some("Trevor de Clercq"),
        _ => None,
    }
}
