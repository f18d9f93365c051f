pub mod simple;
pub mod xml;


use crate::error::FormatError;
use crate::results::Crawl;

pub use simple::SimpleFormatter;
pub use xml::XmlFormatter;

/// Converts a crawl into a complete output document
pub trait Formatter: Send + Sync {
    /// Render the whole document for the given crawl
    fn format(&self, crawl: &Crawl) -> Result<Vec<u8>, FormatError>;

    /// File extension used when writing the document to a directory
    fn extension(&self) -> &'static str;
}

/// Every available output format, keyed by the name callers select it with
static FORMATTERS: &[(&str, &dyn Formatter)] = &[
    ("xml", &XmlFormatter),
    ("simple", &SimpleFormatter),
];

/// Find the formatter registered under `name` (exact match)
pub fn lookup(name: &str) -> Option<&'static dyn Formatter> {
    FORMATTERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, formatter)| *formatter)
}

/// Names of all registered formats, in registration order
pub fn names() -> impl Iterator<Item = &'static str> {
    FORMATTERS.iter().map(|(name, _)| *name)
}

/// Look up `name` and format the crawl with it
pub fn format(name: &str, crawl: &Crawl) -> Result<Vec<u8>, FormatError> {
    let formatter = lookup(name).ok_or_else(|| FormatError::unknown_format(name))?;
    formatter.format(crawl)
}
