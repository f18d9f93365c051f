use crate::config::ExportConfig;
use crate::error::FormatError;
use crate::formats;
use crate::results::Crawl;
use crate::utils;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where a rendered document ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output
    Stdout,
    /// A file on disk
    File(PathBuf),
}

/// Builder for rendering a crawl and writing the result
pub struct Export<'a> {
    // The crawl to render
    crawl: &'a Crawl,

    // The base configuration
    config: ExportConfig,

    // Per-call overrides of the configuration
    format: Option<String>,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl<'a> Export<'a> {
    /// Create a new Export builder for the given crawl
    pub fn new(crawl: &'a Crawl) -> Self {
        Self {
            crawl,
            config: ExportConfig::new(),
            format: None,
            output: None,
            output_dir: None,
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, FormatError> {
        self.config = ExportConfig::from_file(path)?;
        Ok(self)
    }

    /// Override the output format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Override the output file
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Name of the format that will be rendered
    pub fn format_name(&self) -> &str {
        self.format.as_deref().unwrap_or(&self.config.format)
    }

    /// Render the crawl in the selected format
    pub fn render(&self) -> Result<Vec<u8>, FormatError> {
        formats::format(self.format_name(), self.crawl)
    }

    /// Resolve where `write` will put the document.
    ///
    /// An explicit output file wins over an output directory, and builder
    /// overrides win over the configuration. With neither set the document
    /// goes to stdout.
    pub fn destination(&self) -> Result<Destination, FormatError> {
        let (output, output_dir) = if self.output.is_some() || self.output_dir.is_some() {
            (self.output.as_ref(), self.output_dir.as_ref())
        } else {
            (self.config.output.as_ref(), self.config.output_dir.as_ref())
        };

        if let Some(path) = output {
            return Ok(Destination::File(path.clone()));
        }
        let Some(dir) = output_dir else {
            return Ok(Destination::Stdout);
        };

        let name = self.format_name();
        let formatter = formats::lookup(name).ok_or_else(|| FormatError::unknown_format(name))?;
        let base_url = self.crawl.base_url().ok_or(FormatError::EmptyCrawl)?;
        let filename = utils::output_filename(base_url, formatter.extension());

        Ok(Destination::File(dir.join(filename)))
    }

    /// Render the crawl and write it to its destination
    pub fn write(&self) -> Result<Destination, FormatError> {
        let destination = self.destination()?;
        let document = self.render()?;

        match &destination {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&document)?;
                stdout.flush()?;
            }
            Destination::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, &document)?;
            }
        }

        ::log::info!(
            "Wrote {} bytes of {} output to {:?}",
            document.len(),
            self.format_name(),
            destination
        );
        Ok(destination)
    }
}
