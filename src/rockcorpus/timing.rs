use std::fs;
use std::path::Path;

use super::lab::{data_lines, parse_number, split_row};
use super::types::ConvertError;

/// Label attached to every event in the beat track. Each timing row marks
/// the start of a measure, so all events carry the same marker.
pub const MEASURE_START_LABEL: f64 = 1.0;

const COLUMNS: usize = 2;

/// Measure-start times read from one timing data file.
#[derive(Debug, Clone)]
pub struct TimingSeries {
    pub times: Vec<f64>,
}

/// Read a timing data file mapping absolute time to measure number.
///
/// Only the time column is kept; the measure number is validated as numeric
/// and dropped. Timing rows have no duration semantics.
pub fn read_timing(path: &Path) -> Result<TimingSeries, ConvertError> {
    let text = fs::read_to_string(path)?;
    let lines = data_lines(&text);

    let mut times = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        let cols = split_row(line, COLUMNS, idx + 1)?;
        times.push(parse_number(cols[0], idx + 1)?);
        parse_number(cols[1], idx + 1)?;
    }

    Ok(TimingSeries { times })
}
