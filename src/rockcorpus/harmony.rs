use std::fs;
use std::path::Path;

use super::lab::{data_lines, parse_number, split_row};
use super::types::ConvertError;

/// Number of columns in every line of an expanded harmony file except the last.
const HEAD_COLUMNS: usize = 7;
/// Number of columns in the trailing boundary line.
const TAIL_COLUMNS: usize = 3;

/// Chord events read from one expanded harmony file, as parallel sequences.
#[derive(Debug, Clone)]
pub struct HarmonySeries {
    pub starts: Vec<f64>,
    pub ends: Vec<f64>,
    /// Roman numeral chord symbols.
    pub labels: Vec<String>,
    /// Pitch class of the active key, one entry per chord.
    pub keys: Vec<String>,
    /// Closing boundary time from the trailing line; becomes the document
    /// duration.
    pub duration: f64,
}

/// Read an expanded `.clt` harmony file.
///
/// All lines except the last have seven columns; the trailing line has
/// three, with the closing boundary time in its second field. Before
/// add-timings has been run the first two head columns are the chord's
/// start and end (in measures). After add-timings they are absolute seconds
/// and start time in measures instead, so end times are reconstructed from
/// the following chord's start, with the last chord running to the boundary.
pub fn read_harmony(path: &Path, timing_added: bool) -> Result<HarmonySeries, ConvertError> {
    let text = fs::read_to_string(path)?;
    let lines = data_lines(&text);

    if lines.len() < 2 {
        return Err(ConvertError::MalformedInput(format!(
            "harmony file needs at least 2 lines, found {}",
            lines.len()
        )));
    }

    let head = &lines[..lines.len() - 1];
    let tail = lines[lines.len() - 1];

    let mut starts = Vec::with_capacity(head.len());
    let mut ends = Vec::with_capacity(head.len());
    let mut labels = Vec::with_capacity(head.len());
    let mut keys = Vec::with_capacity(head.len());

    for (idx, line) in head.iter().enumerate() {
        let cols = split_row(line, HEAD_COLUMNS, idx + 1)?;
        if timing_added {
            // seconds, start, chord, chromatic root, diatonic root, key, absolute root
            starts.push(parse_number(cols[1], idx + 1)?);
        } else {
            // start, end, chord, chromatic root, diatonic root, key, absolute root
            starts.push(parse_number(cols[0], idx + 1)?);
            ends.push(parse_number(cols[1], idx + 1)?);
        }
        labels.push(cols[2].to_string());
        keys.push(cols[5].to_string());
    }

    let tail_cols = split_row(tail, TAIL_COLUMNS, lines.len())?;
    let boundary = parse_number(tail_cols[1], lines.len())?;

    if timing_added {
        // end of chord i is the start of chord i + 1
        ends.extend(starts.iter().skip(1).copied());
        ends.push(boundary);
    }

    for i in 1..starts.len() {
        if starts[i] < starts[i - 1] {
            return Err(ConvertError::MalformedInput(format!(
                "chord starts out of order at event {}",
                i
            )));
        }
    }
    for (i, (&start, &end)) in starts.iter().zip(&ends).enumerate() {
        if end < start {
            return Err(ConvertError::MalformedInput(format!(
                "chord {} ends before it starts ({} < {})",
                i, end, start
            )));
        }
    }

    Ok(HarmonySeries {
        starts,
        ends,
        labels,
        keys,
        duration: boundary,
    })
}
