/// JAMS document model and JSON serialization.
///
/// This module provides functionality to:
/// - Model a per-song annotation document (chord, note and beat tracks)
/// - Stamp annotation provenance (corpus, curator, annotators)
/// - Write documents to disk and read them back
mod io;
mod types;

pub use io::JamsError;
pub use types::{
    Annotation, AnnotationMetadata, Annotator, Curator, Event, FileMetadata, Jams, Label,
    Namespace, CORPUS, CORPUS_VERSION,
};
