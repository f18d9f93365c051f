use crate::error::FormatError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A visited page with its last-modified time and the links found on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Absolute URL of the page
    pub url: String,

    /// When the page was last modified, if the server said so
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    /// Links discovered on the page, in document order
    #[serde(default)]
    pub links: Vec<String>,
}

impl Page {
    /// Create a page with no timestamp and no links
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_modified: None,
            links: Vec::new(),
        }
    }

    /// Set the last-modified time
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Set the discovered links
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }
}

/// The result of a crawl: the base page followed by every other visited page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crawl {
    pub pages: Vec<Page>,
}

impl Crawl {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// URL of the first page, which the crawl started from
    pub fn base_url(&self) -> Option<&str> {
        self.pages.first().map(|page| page.url.as_str())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Parse a crawl from a JSON string
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a crawl from any reader (e.g. stdin)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FormatError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a crawl from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FormatError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }
}
