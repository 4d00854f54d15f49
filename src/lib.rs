//! Converts the Rock Corpus dataset's annotation files into JAMS documents.
//!
//! The dataset is found online at <http://theory.esm.rochester.edu/rock_corpus/>.

pub mod config;
pub mod jams;
pub mod rockcorpus;
