use serde::{Deserialize, Serialize};

/// Corpus name stamped into every annotation track.
pub const CORPUS: &str = "Rock Corpus";
/// Release of the dataset the annotations were taken from.
pub const CORPUS_VERSION: &str = "2.1";

const DATA_SOURCE: &str = "manually annotated by David Temperley and Trevor de Clercq";
const CURATOR_NAME: &str = "David Temperley";
const CURATOR_EMAIL: &str = "dtemperley@esm.rochester.edu";

/// Label carried by one observation. Chord tracks use text labels, note and
/// beat tracks use numeric ones (MIDI note numbers, measure markers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Number(f64),
}

/// One observation in an annotation track. Range events carry an end time,
/// point events do not. `start <= end` whenever both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    pub label: Label,
}

/// Track kind, serialized as the namespace string of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Chord,
    Note,
    Beat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curator {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotator {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Provenance attached to every annotation track.
///
/// The corpus has two annotators (David Temperley and Trevor de Clercq)
/// while the historical schema only holds a single curator slot, so
/// annotator identity is kept as a list rather than one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMetadata {
    pub corpus: String,
    pub version: String,
    pub annotation_rules: String,
    pub data_source: String,
    pub curator: Curator,
    pub annotators: Vec<Annotator>,
}

impl Default for AnnotationMetadata {
    fn default() -> Self {
        AnnotationMetadata {
            corpus: CORPUS.to_string(),
            version: CORPUS_VERSION.to_string(),
            annotation_rules: String::new(),
            data_source: DATA_SOURCE.to_string(),
            curator: Curator {
                name: CURATOR_NAME.to_string(),
                email: CURATOR_EMAIL.to_string(),
            },
            annotators: Vec::new(),
        }
    }
}

/// A labeled sequence of time-ranged observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub namespace: Namespace,
    pub annotation_metadata: AnnotationMetadata,
    pub data: Vec<Event>,
}

impl Annotation {
    /// Build a range-event track from parallel start/end/label sequences.
    pub fn from_ranges(
        namespace: Namespace,
        starts: &[f64],
        ends: &[f64],
        labels: impl IntoIterator<Item = Label>,
    ) -> Self {
        let data = starts
            .iter()
            .zip(ends)
            .zip(labels)
            .map(|((&start, &end), label)| Event {
                start,
                end: Some(end),
                label,
            })
            .collect();
        Annotation {
            namespace,
            annotation_metadata: AnnotationMetadata::default(),
            data,
        }
    }

    /// Build a point-event track where every timestamp carries the same label.
    pub fn from_points(namespace: Namespace, times: &[f64], label: Label) -> Self {
        let data = times
            .iter()
            .map(|&start| Event {
                start,
                end: None,
                label: label.clone(),
            })
            .collect();
        Annotation {
            namespace,
            annotation_metadata: AnnotationMetadata::default(),
            data,
        }
    }
}

/// Song-level metadata of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub title: String,
    pub artist: String,
    pub release: String,
    /// Total length of the annotated material, in the dataset's time units.
    pub duration: f64,
}

/// One JAMS document: song metadata plus its annotation tracks. Built fresh
/// per song and written once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jams {
    pub file_metadata: FileMetadata,
    pub annotations: Vec<Annotation>,
}

impl Jams {
    pub fn new(file_metadata: FileMetadata) -> Self {
        Jams {
            file_metadata,
            annotations: Vec::new(),
        }
    }
}
