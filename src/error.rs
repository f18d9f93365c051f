use thiserror::Error;

/// Errors produced while turning a crawl into an output document
#[derive(Debug, Error)]
pub enum FormatError {
    /// No formatter is registered under the requested name
    #[error("unknown format {name:?} (valid formats: {valid})")]
    UnknownFormat { name: String, valid: String },

    /// The sitemap writer failed
    #[error("error formatting sitemap as xml: {0}")]
    Xml(#[source] std::io::Error),

    /// The crawl has no base page to report on
    #[error("crawl contains no pages")]
    EmptyCrawl,

    /// Crawl or config JSON could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// Build an `UnknownFormat` error listing every registered name
    pub fn unknown_format(name: &str) -> Self {
        Self::UnknownFormat {
            name: name.to_string(),
            valid: crate::formats::names().collect::<Vec<_>>().join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_lists_valid_names() {
        let err = FormatError::unknown_format("json");
        assert_eq!(
            err.to_string(),
            "unknown format \"json\" (valid formats: xml, simple)"
        );
    }

    #[test]
    fn test_xml_error_message_has_context() {
        let err = FormatError::Xml(std::io::Error::other("boom"));
        assert!(
            err.to_string()
                .starts_with("error formatting sitemap as xml")
        );
    }
}
