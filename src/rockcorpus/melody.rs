use std::fs;
use std::path::Path;

use super::lab::{data_lines, parse_number, split_row};
use super::types::ConvertError;

/// Columns per row once add-timings has been run.
const TIMED_COLUMNS: usize = 4;
/// Columns per row in measure-only files.
const UNTIMED_COLUMNS: usize = 3;

/// Note events read from one expanded melody file.
#[derive(Debug, Clone)]
pub struct MelodySeries {
    pub starts: Vec<f64>,
    pub ends: Vec<f64>,
    /// MIDI note numbers (middle C = 60).
    pub notes: Vec<f64>,
}

/// Read an expanded `.nlt` melody file.
///
/// The dataset carries no note durations, so the end of note *i* is taken
/// to be the start of note *i + 1* and the last note is stretched to
/// `duration`, which the caller recovers from the harmony annotation. That
/// final end time is an approximation, not ground truth; the emitted track
/// states this in its annotation rules.
pub fn read_melody(
    path: &Path,
    timing_added: bool,
    duration: f64,
) -> Result<MelodySeries, ConvertError> {
    let text = fs::read_to_string(path)?;
    let lines = data_lines(&text);

    let mut starts = Vec::with_capacity(lines.len());
    let mut notes = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        if timing_added {
            // seconds, start, note, scale degree
            let cols = split_row(line, TIMED_COLUMNS, idx + 1)?;
            starts.push(parse_number(cols[1], idx + 1)?);
            notes.push(parse_number(cols[2], idx + 1)?);
        } else {
            // start, note, scale degree
            let cols = split_row(line, UNTIMED_COLUMNS, idx + 1)?;
            starts.push(parse_number(cols[0], idx + 1)?);
            notes.push(parse_number(cols[1], idx + 1)?);
        }
    }

    for i in 1..starts.len() {
        if starts[i] < starts[i - 1] {
            return Err(ConvertError::MalformedInput(format!(
                "note starts out of order at event {}",
                i
            )));
        }
    }

    let mut ends: Vec<f64> = starts.iter().skip(1).copied().collect();
    if !starts.is_empty() {
        ends.push(duration);
    }

    Ok(MelodySeries {
        starts,
        ends,
        notes,
    })
}
