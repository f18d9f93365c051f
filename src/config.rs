use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for exporting a crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Name of the output format (see `formats::names`)
    #[serde(default = "default_format")]
    pub format: String,

    /// File to write the document to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Directory to write the document to, named after the base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Default value for format
fn default_format() -> String {
    "xml".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportConfig {
    /// Create a configuration that writes an xml sitemap to stdout
    pub fn new() -> Self {
        Self {
            format: default_format(),
            output: None,
            output_dir: None,
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FormatError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}
