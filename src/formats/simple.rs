use crate::error::FormatError;
use crate::formats::Formatter;
use crate::results::Crawl;
use std::collections::HashSet;

/// How a page without a last-modified time is shown: the zero instant
const UNSET_TIMESTAMP: &str = "0001-01-01 00:00:00 UTC";

/// Formats a crawl as an indented plain-text outline.
///
/// The first page is the header. Every later page is listed with its
/// last-modified time and the links found on it, skipping any URL that
/// was already listed as a page or a link earlier in the outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn format(&self, crawl: &Crawl) -> Result<Vec<u8>, FormatError> {
        let (base, rest) = crawl.pages.split_first().ok_or(FormatError::EmptyCrawl)?;
        ::log::debug!("Formatting {} pages as simple outline", crawl.len());

        let mut out = format!("Crawl results for {}\n", base.url);

        // The base page is never marked seen, so a later link back to it is listed
        let mut seen: HashSet<&str> = HashSet::new();
        for page in rest {
            let last_modified = page
                .last_modified
                .map_or_else(|| UNSET_TIMESTAMP.to_string(), |t| t.to_string());
            out.push_str(&format!("  - {}\n", page.url));
            out.push_str(&format!("    Last modified: {}\n", last_modified));
            seen.insert(page.url.as_str());

            for link in &page.links {
                if !seen.insert(link.as_str()) {
                    ::log::trace!("Skipping already listed link: {}", link);
                    continue;
                }
                out.push_str(&format!("    - {}\n", link));
            }
        }

        ::log::debug!("Outline is {} bytes", out.len());
        Ok(out.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Page;
    use chrono::{TimeZone, Utc};

    fn render(crawl: &Crawl) -> String {
        String::from_utf8(SimpleFormatter.format(crawl).unwrap()).unwrap()
    }

    #[test]
    fn test_base_page_only() {
        let crawl = Crawl::new(vec![Page::new("https://a.com").with_links(["https://a.com/x"])]);
        assert_eq!(render(&crawl), "Crawl results for https://a.com\n");
    }

    #[test]
    fn test_timestamp_rendering() {
        // chrono Display without a numeric offset: "2024-01-15 10:30:00 UTC",
        // and "0001-01-01 00:00:00 UTC" when unset
        let when = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let crawl = Crawl::new(vec![
            Page::new("https://a.com"),
            Page::new("https://a.com/b").with_last_modified(when),
            Page::new("https://a.com/c"),
        ]);

        let expected = concat!(
            "Crawl results for https://a.com\n",
            "  - https://a.com/b\n",
            "    Last modified: 2024-01-15 10:30:00 UTC\n",
            "  - https://a.com/c\n",
            "    Last modified: 0001-01-01 00:00:00 UTC\n",
        );
        assert_eq!(render(&crawl), expected);
    }

    #[test]
    fn test_duplicate_links_within_page() {
        let crawl = Crawl::new(vec![
            Page::new("https://a.com"),
            Page::new("https://a.com/b").with_links(["https://a.com/c", "https://a.com/c"]),
        ]);

        let output = render(&crawl);
        assert_eq!(output.matches("- https://a.com/c\n").count(), 1);
    }

    #[test]
    fn test_empty_crawl_is_an_error() {
        let result = SimpleFormatter.format(&Crawl::default());
        assert!(matches!(result, Err(FormatError::EmptyCrawl)));
    }

    #[test]
    fn test_extension() {
        assert_eq!(SimpleFormatter.extension(), "txt");
    }
}
