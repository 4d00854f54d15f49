// Test utilities and common constants
//
// This file provides shared utilities and constants used across multiple test files.
// It centralizes the sample dataset locations and helpers for building batch
// options over a scratch output directory, to avoid duplication and ensure
// consistency across tests.

use std::path::{Path, PathBuf};

use rockcorpus_jams::config::DatasetLayout;
use rockcorpus_jams::rockcorpus::{BatchOptions, SongFiles};

/// Sample dataset in measure units (add-timings has not been run)
pub const MEASURES_DATASET: &str = "tests/samples/measures";
/// Sample dataset after add-timings has been run
#[allow(dead_code)]
pub const TIMED_DATASET: &str = "tests/samples/timed";
/// Dataset with one good song and one truncated harmony file
#[allow(dead_code)]
pub const TRUNCATED_DATASET: &str = "tests/samples/truncated";
/// Dataset without an audio sources index
#[allow(dead_code)]
pub const NOINDEX_DATASET: &str = "tests/samples/noindex";

/// Build batch options for a sample dataset, writing into `output_dir`.
#[allow(dead_code)]
pub fn batch_options(dataset: &str, output_dir: &Path, timing_added: bool) -> BatchOptions {
    BatchOptions {
        input_dir: PathBuf::from(dataset),
        output_dir: output_dir.to_path_buf(),
        timing_added,
        layout: DatasetLayout::default(),
    }
}

/// Locate the three annotation files of one sample song.
///
/// # Arguments
/// * `dataset` - Root of the sample dataset
/// * `stem` - Harmony/melody file stem including the annotator code
/// * `song` - Song name without the annotator code (timing files use it)
#[allow(dead_code)]
pub fn song_files(dataset: &str, stem: &str, song: &str) -> SongFiles {
    let root = PathBuf::from(dataset);
    SongFiles {
        harmony: root.join("rs200_harmony_clt").join(format!("{}.clt", stem)),
        melody: root.join("rs200_melody_nlt").join(format!("{}.nlt", stem)),
        timing: root.join("rs200_timing_data").join(format!("{}_tim.txt", song)),
    }
}

/// Count the files in a directory, returning 0 if it does not exist.
#[allow(dead_code)]
pub fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|entry| entry.ok()).count())
        .unwrap_or(0)
}
