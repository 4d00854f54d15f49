use serde::Deserialize;
use std::fs::File;
use std::io::Read;

/// Configuration for the converter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetLayout,
}

/// Where the annotation files live inside a dataset directory
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetLayout {
    /// Directory with the expanded harmony annotations
    pub harmony_dir: String,
    /// Directory with the expanded melody annotations
    pub melody_dir: String,
    /// Directory with the measure timing data
    pub timing_dir: String,
    /// Name of the song index file at the top of the dataset
    pub audio_sources_file: String,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        DatasetLayout {
            harmony_dir: "rs200_harmony_clt".to_string(),
            melody_dir: "rs200_melody_nlt".to_string(),
            timing_dir: "rs200_timing_data".to_string(),
            audio_sources_file: "audio_sources.txt".to_string(),
        }
    }
}

/// Load configuration from config.toml
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Try to load from config.toml
    match File::open("config.toml") {
        Ok(mut file) => {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            Ok(toml::from_str(&contents)?)
        }
        Err(_) => {
            // If file doesn't exist, return default config
            Ok(Config::default())
        }
    }
}

/// Get the dataset layout, falling back to the rs200 defaults
pub fn get_dataset_layout() -> DatasetLayout {
    load_config().unwrap_or_default().dataset
}
