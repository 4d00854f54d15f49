// Annotation file reader tests
//
// These tests focus on the row-level readers for the three annotation file
// formats: expanded harmony (.clt), expanded melody (.nlt) and measure
// timing data, plus the audio sources index.
//
// Assembly of whole JAMS documents and batch behavior are the domain of
// `integration_tests.rs`.
//
// The tests cover both column layouts of the harmony and melody files
// (before and after the add-timings utility has been run), the irregular
// trailing harmony line, and malformed-input handling.

use std::path::Path;

use rockcorpus_jams::rockcorpus::{
    load_song_index, read_harmony, read_melody, read_timing, ConvertError,
};

mod test_utils;
use test_utils::{MEASURES_DATASET, TIMED_DATASET};

/// Test harmony parsing in measure units (add-timings not run).
///
/// This test verifies:
/// - N input rows produce exactly N-1 chord events
/// - Start and end times come straight from the first two columns
/// - Chord labels and keys come from the third and sixth columns
/// - The trailing line's second field becomes the duration
#[test]
fn test_harmony_event_alignment() {
    let path = Path::new(MEASURES_DATASET).join("rs200_harmony_clt/twist_and_shout_dt.clt");
    let harmony = read_harmony(&path, false).expect("Failed to read harmony file");

    assert_eq!(harmony.starts, vec![0.0, 4.0, 8.0]);
    assert_eq!(harmony.ends, vec![4.0, 8.0, 12.0]);
    assert_eq!(harmony.labels, vec!["I", "IV", "V"]);
    assert_eq!(harmony.keys, vec!["D", "D", "D"]);
    assert_eq!(harmony.duration, 12.0);

    // adjacent chords line up
    for i in 0..harmony.starts.len() - 1 {
        assert_eq!(harmony.ends[i], harmony.starts[i + 1]);
    }
}

/// Test harmony parsing after add-timings has been run.
///
/// This test verifies:
/// - Start times come from the second column (measures), not the first
/// - End times are reconstructed from the following chord's start
/// - The last chord runs to the trailing line's second field
#[test]
fn test_harmony_timing_added() {
    let path = Path::new(TIMED_DATASET).join("rs200_harmony_clt/be_my_baby_dt.clt");
    let harmony = read_harmony(&path, true).expect("Failed to read timed harmony file");

    assert_eq!(harmony.starts, vec![0.0, 4.0, 6.0]);
    assert_eq!(harmony.ends, vec![4.0, 6.0, 8.0]);
    assert_eq!(harmony.labels, vec!["I", "IV", "V"]);
    assert_eq!(harmony.duration, 8.0);
}

/// Test that the trailing line sets the duration even when it lies beyond
/// the last chord's end.
#[test]
fn test_harmony_trailing_row_sets_duration() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scenario.clt");
    std::fs::write(
        &path,
        "0.0\t4.0\tI\t0\t1\tC\t0\n4.0\t8.0\tV\t7\t5\tC\t7\n8.0\t12.0\tend\n",
    )
    .expect("Failed to write harmony file");

    let harmony = read_harmony(&path, false).expect("Failed to read harmony file");

    assert_eq!(harmony.starts, vec![0.0, 4.0]);
    assert_eq!(harmony.ends, vec![4.0, 8.0]);
    assert_eq!(harmony.labels, vec!["I", "V"]);
    assert_eq!(harmony.duration, 12.0);
}

/// Test that a harmony file with fewer than two lines is rejected as
/// malformed rather than producing an empty track.
#[test]
fn test_harmony_truncated_rejected() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("truncated.clt");
    std::fs::write(&path, "0.0\t4.0\tI\t0\t1\tC\t0\n").expect("Failed to write harmony file");

    let err = read_harmony(&path, false).expect_err("Truncated file should fail");
    assert!(matches!(err, ConvertError::MalformedInput(_)));
}

/// Test that a head row with the wrong column count is rejected.
#[test]
fn test_harmony_wrong_column_count() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("narrow.clt");
    std::fs::write(&path, "0.0\t4.0\tI\t0\t1\n4.0\t4.0\tend\n").expect("Failed to write file");

    let err = read_harmony(&path, false).expect_err("Five-column row should fail");
    assert!(matches!(err, ConvertError::MalformedInput(_)));
}

/// Test melody parsing in measure units.
///
/// This test verifies:
/// - Each note's end time is the start of the following note
/// - The last note's end time is the supplied duration
/// - Labels are the MIDI note numbers from the second column
#[test]
fn test_melody_end_chaining() {
    let path = Path::new(MEASURES_DATASET).join("rs200_melody_nlt/twist_and_shout_dt.nlt");
    let melody = read_melody(&path, false, 12.0).expect("Failed to read melody file");

    assert_eq!(melody.starts, vec![0.0, 1.0, 2.0, 4.0, 8.0]);
    assert_eq!(melody.ends, vec![1.0, 2.0, 4.0, 8.0, 12.0]);
    assert_eq!(melody.notes, vec![62.0, 66.0, 69.0, 67.0, 69.0]);

    for i in 0..melody.starts.len() - 1 {
        assert_eq!(melody.ends[i], melody.starts[i + 1]);
    }
}

/// Test melody parsing after add-timings has been run (four columns, start
/// time in the second, note number in the third).
#[test]
fn test_melody_timing_added() {
    let path = Path::new(TIMED_DATASET).join("rs200_melody_nlt/be_my_baby_dt.nlt");
    let melody = read_melody(&path, true, 8.0).expect("Failed to read timed melody file");

    assert_eq!(melody.starts, vec![0.0, 1.0, 2.0]);
    assert_eq!(melody.ends, vec![1.0, 2.0, 8.0]);
    assert_eq!(melody.notes, vec![64.0, 66.0, 68.0]);
}

/// Test that an empty melody file yields an empty track rather than an error.
#[test]
fn test_melody_empty_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.nlt");
    std::fs::write(&path, "").expect("Failed to write melody file");

    let melody = read_melody(&path, false, 4.0).expect("Empty melody should parse");
    assert!(melody.starts.is_empty());
    assert!(melody.ends.is_empty());
    assert!(melody.notes.is_empty());
}

/// Test timing parsing.
///
/// This test verifies:
/// - One time per row, taken from the first column
/// - The measure-number column is validated but not kept
#[test]
fn test_timing_measure_starts() {
    let path = Path::new(MEASURES_DATASET).join("rs200_timing_data/twist_and_shout_tim.txt");
    let timing = read_timing(&path).expect("Failed to read timing file");

    assert_eq!(timing.times, vec![0.52, 2.49, 4.41, 6.38]);
}

/// Test that a timing row with the wrong column count is rejected.
#[test]
fn test_timing_wrong_column_count() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("wide_tim.txt");
    std::fs::write(&path, "0.5\t1\t1\n").expect("Failed to write timing file");

    let err = read_timing(&path).expect_err("Three-column row should fail");
    assert!(matches!(err, ConvertError::MalformedInput(_)));
}

/// Test audio sources index loading and lookup.
#[test]
fn test_song_index_lookup() {
    let path = Path::new(MEASURES_DATASET).join("audio_sources.txt");
    let index = load_song_index(&path).expect("Failed to load song index");

    assert_eq!(index.len(), 2);
    let info = index.get("twist_and_shout").expect("Song should be indexed");
    assert_eq!(info.artist, "The Beatles");
    assert_eq!(info.album, "Please Please Me");
}

/// Test that a song name listed twice keeps the last row seen.
#[test]
fn test_song_index_duplicate_last_wins() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("audio_sources.txt");
    std::fs::write(
        &path,
        "some_song\tFirst Artist\tFirst Album\nsome_song\tSecond Artist\tSecond Album\n",
    )
    .expect("Failed to write index file");

    let index = load_song_index(&path).expect("Failed to load song index");
    assert_eq!(index.len(), 1);
    assert_eq!(index["some_song"].artist, "Second Artist");
}

/// Test that a missing index file is reported as a missing reference file,
/// not a generic IO error.
#[test]
fn test_song_index_missing() {
    let err = load_song_index(Path::new("tests/samples/no_such_index.txt"))
        .expect_err("Missing index should fail");
    assert!(matches!(err, ConvertError::MissingReferenceFile(_)));
}
