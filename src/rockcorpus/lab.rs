//! Row splitting shared by the annotation file readers.

use super::types::ConvertError;

/// Split one annotation row into exactly `ncols` whitespace-separated
/// columns. `line_no` is 1-based and only used for error messages.
pub(crate) fn split_row(line: &str, ncols: usize, line_no: usize) -> Result<Vec<&str>, ConvertError> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() != ncols {
        return Err(ConvertError::MalformedInput(format!(
            "line {}: expected {} columns, found {}",
            line_no,
            ncols,
            cols.len()
        )));
    }
    Ok(cols)
}

/// Parse one numeric field of a row.
pub(crate) fn parse_number(field: &str, line_no: usize) -> Result<f64, ConvertError> {
    field.parse().map_err(|_| {
        ConvertError::MalformedInput(format!("line {}: not a number: {:?}", line_no, field))
    })
}

/// Collect the non-empty lines of an annotation file.
pub(crate) fn data_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}
