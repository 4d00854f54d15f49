use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DatasetLayout;

use super::types::{annotator_name, ConvertError, SongFiles, SongIndex};
use super::{load_song_index, Converter};

/// Options for one batch conversion run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// The unarchived Rock Corpus directory.
    pub input_dir: PathBuf,
    /// Where the JAMS files are written.
    pub output_dir: PathBuf,
    /// Whether the dataset has been run through the add-timings utility.
    pub timing_added: bool,
    /// Directory names inside the dataset.
    pub layout: DatasetLayout,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Stems of the songs that produced an output document.
    pub converted: Vec<String>,
    /// (stem, reason) for every song that was skipped.
    pub skipped: Vec<(String, String)>,
}

/// Convert every song in the dataset, one output document per harmony file.
///
/// The audio sources index is loaded up front and its absence aborts the
/// run. A failure in one song is logged and skipped; the batch continues
/// with the remaining songs. Songs are visited in sorted order so repeated
/// runs produce identical output.
pub fn run_batch(options: &BatchOptions) -> Result<BatchSummary, ConvertError> {
    let index = load_song_index(&options.input_dir.join(&options.layout.audio_sources_file))?;

    let harmony_dir = options.input_dir.join(&options.layout.harmony_dir);
    let mut harmony_files: Vec<PathBuf> = fs::read_dir(&harmony_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "clt"))
        .collect();
    harmony_files.sort();

    fs::create_dir_all(&options.output_dir)?;

    let converter = Converter::new(options.timing_added);
    let mut summary = BatchSummary::default();

    for harmony_path in &harmony_files {
        let stem = match harmony_path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_string(),
            None => {
                tracing::warn!(path = %harmony_path.display(), "unusable file name");
                continue;
            }
        };
        match convert_one(&converter, options, &index, harmony_path, &stem) {
            Ok(()) => {
                tracing::info!(song = %stem, "converted");
                summary.converted.push(stem);
            }
            Err(err) => {
                tracing::warn!(song = %stem, error = %err, "skipping song");
                summary.skipped.push((stem, err.to_string()));
            }
        }
    }

    Ok(summary)
}

fn convert_one(
    converter: &Converter,
    options: &BatchOptions,
    index: &SongIndex,
    harmony_path: &Path,
    stem: &str,
) -> Result<(), ConvertError> {
    let (song, annotator) = split_annotator_code(stem).ok_or_else(|| {
        ConvertError::MalformedInput(format!("no annotator code in file name {:?}", stem))
    })?;
    let info = index
        .get(song)
        .ok_or_else(|| ConvertError::UnknownSong(song.to_string()))?;

    let files = SongFiles {
        harmony: harmony_path.to_path_buf(),
        melody: options
            .input_dir
            .join(&options.layout.melody_dir)
            .join(format!("{}.nlt", stem)),
        // timing data is annotator independent, so it is keyed by song name
        timing: options
            .input_dir
            .join(&options.layout.timing_dir)
            .join(format!("{}_tim.txt", song)),
    };

    let jams = converter.convert_song(&files, song, info, annotator)?;
    jams.save(&options.output_dir.join(format!("{}.jams", stem)))?;
    Ok(())
}

/// Split a file stem like `a_hard_days_night_dt` into the song name and the
/// resolved annotator name.
fn split_annotator_code(stem: &str) -> Option<(&str, &'static str)> {
    let (song, code) = stem.rsplit_once('_')?;
    annotator_name(code).map(|name| (song, name))
}
