/// Rock Corpus annotation parsing and conversion.
///
/// This module provides functionality to:
/// - Read expanded harmony (.clt), melody (.nlt) and timing annotation files
/// - Assemble one JAMS document per song
/// - Drive a whole-dataset batch conversion
mod batch;
mod harmony;
mod lab;
mod melody;
mod sources;
mod timing;
mod types;

pub use batch::{run_batch, BatchOptions, BatchSummary};
pub use harmony::{read_harmony, HarmonySeries};
pub use melody::{read_melody, MelodySeries};
pub use sources::load_song_index;
pub use timing::{read_timing, TimingSeries, MEASURE_START_LABEL};
pub use types::{annotator_name, ConvertError, SongFiles, SongIndex, SongInfo};

use crate::jams::{Annotation, Annotator, FileMetadata, Jams, Label, Namespace};

/// Stated in the note track so the approximated final note duration is not
/// hidden from consumers of the output.
const NOTE_DURATION_RULE: &str = "Note end times equal the start of the following note; \
     the final note's end time equals the file duration and is approximate.";

/// Converts one song's annotation files into a JAMS document.
pub struct Converter {
    timing_added: bool,
}

impl Converter {
    /// `timing_added` must be set when the dataset has been run through the
    /// add-timings utility, which changes the column layout of the harmony
    /// and melody files.
    pub fn new(timing_added: bool) -> Self {
        Converter { timing_added }
    }

    /// Convert one song. The readers run in a fixed order since the melody
    /// reader needs the duration recovered by the harmony reader. Any
    /// reader error fails the whole song.
    pub fn convert_song(
        &self,
        files: &SongFiles,
        title: &str,
        info: &SongInfo,
        annotator: &str,
    ) -> Result<Jams, ConvertError> {
        let harmony = read_harmony(&files.harmony, self.timing_added)?;
        let melody = read_melody(&files.melody, self.timing_added, harmony.duration)?;
        let timing = read_timing(&files.timing)?;

        // TODO: emit a key annotation track from harmony.keys
        tracing::debug!(song = title, "key information parsed but not written");

        let mut jams = Jams::new(FileMetadata {
            title: title.to_string(),
            artist: info.artist.clone(),
            release: info.album.clone(),
            duration: harmony.duration,
        });
        jams.annotations.push(chord_annotation(&harmony, annotator));
        jams.annotations.push(note_annotation(&melody, annotator));
        jams.annotations.push(beat_annotation(&timing));
        Ok(jams)
    }
}

fn chord_annotation(harmony: &HarmonySeries, annotator: &str) -> Annotation {
    let mut annot = Annotation::from_ranges(
        Namespace::Chord,
        &harmony.starts,
        &harmony.ends,
        harmony.labels.iter().map(|label| Label::Text(label.clone())),
    );
    annot.annotation_metadata.annotators.push(Annotator {
        name: annotator.to_string(),
        email: None,
    });
    annot
}

fn note_annotation(melody: &MelodySeries, annotator: &str) -> Annotation {
    let mut annot = Annotation::from_ranges(
        Namespace::Note,
        &melody.starts,
        &melody.ends,
        melody.notes.iter().map(|&note| Label::Number(note)),
    );
    annot.annotation_metadata.annotation_rules = NOTE_DURATION_RULE.to_string();
    annot.annotation_metadata.annotators.push(Annotator {
        name: annotator.to_string(),
        email: None,
    });
    annot
}

fn beat_annotation(timing: &TimingSeries) -> Annotation {
    Annotation::from_points(
        Namespace::Beat,
        &timing.times,
        Label::Number(MEASURE_START_LABEL),
    )
}
