use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::Jams;

/// Errors that can occur while reading or writing JAMS documents
#[derive(Debug, thiserror::Error)]
pub enum JamsError {
    /// IO errors when reading/writing document files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors while serializing or deserializing a document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Jams {
    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, JamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path`.
    ///
    /// The document is serialized in full before the file is created, so a
    /// failed serialization never leaves a partial file behind.
    pub fn save(&self, path: &Path) -> Result<(), JamsError> {
        let json = self.to_json()?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Read a document back from `path`.
    pub fn load(path: &Path) -> Result<Jams, JamsError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
