//! Sitemap protocol encoder.
//!
//! Writes a `urlset` document with one `url` entry per crawled page. The
//! layout is fixed: every element line starts with a two-space prefix and is
//! indented two more spaces per nesting level, and the document has no
//! trailing newline.

use crate::error::FormatError;
use crate::formats::Formatter;
use crate::results::{Crawl, Page};
use std::io::{self, Write};

/// XML declaration that starts every sitemap
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Namespace of the sitemap protocol
pub const SITEMAP_SCHEMA: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const PREFIX: &str = "  ";
const INDENT: &str = "  ";

/// Date layout for `lastmod`; time of day is dropped
const LASTMOD_FORMAT: &str = "%Y-%m-%d";

/// Formats a crawl as a sitemap XML document
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    fn format(&self, crawl: &Crawl) -> Result<Vec<u8>, FormatError> {
        ::log::debug!("Formatting {} pages as xml sitemap", crawl.len());

        let mut writer = SitemapWriter::new(Vec::new());
        writer.write_document(crawl).map_err(FormatError::Xml)?;
        let output = writer.into_inner();

        ::log::debug!("Sitemap is {} bytes", output.len());
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "xml"
    }
}

/// Writes sitemap elements to any `Write` handle
struct SitemapWriter<W: Write> {
    writer: W,
}

impl<W: Write> SitemapWriter<W> {
    fn new(writer: W) -> Self {
        Self { writer }
    }

    fn into_inner(self) -> W {
        self.writer
    }

    fn write_document(&mut self, crawl: &Crawl) -> io::Result<()> {
        self.writer.write_all(XML_HEADER.as_bytes())?;

        self.line_start(0, false)?;
        write!(
            self.writer,
            "<urlset schema=\"{}\">",
            escape_xml(SITEMAP_SCHEMA)
        )?;

        if crawl.is_empty() {
            // No children, so the closing tag stays on the same line
            write!(self.writer, "</urlset>")?;
            return Ok(());
        }

        for page in &crawl.pages {
            self.write_url(page)?;
        }

        self.line_start(0, true)?;
        write!(self.writer, "</urlset>")?;
        Ok(())
    }

    fn write_url(&mut self, page: &Page) -> io::Result<()> {
        self.line_start(1, true)?;
        write!(self.writer, "<url>")?;

        self.write_field("loc", &page.url)?;
        if let Some(last_modified) = page.last_modified {
            let date = last_modified.format(LASTMOD_FORMAT).to_string();
            self.write_field("lastmod", &date)?;
        }

        self.line_start(1, true)?;
        write!(self.writer, "</url>")
    }

    fn write_field(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.line_start(2, true)?;
        write!(self.writer, "<{name}>{}</{name}>", escape_xml(value))
    }

    /// Start an element line at the given depth below `urlset`
    fn line_start(&mut self, depth: usize, newline: bool) -> io::Result<()> {
        if newline {
            self.writer.write_all(b"\n")?;
        }
        self.writer.write_all(PREFIX.as_bytes())?;
        for _ in 0..depth {
            self.writer.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }
}

/// Escape text for use in element content or attribute values
fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            c if is_xml_char(c) => escaped.push(c),
            _ => escaped.push(char::REPLACEMENT_CHARACTER),
        }
    }
    escaped
}

/// Whether `c` is allowed in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn render(crawl: &Crawl) -> String {
        String::from_utf8(XmlFormatter.format(crawl).unwrap()).unwrap()
    }

    #[test]
    fn test_single_page_layout() {
        let when = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap();
        let crawl = Crawl::new(vec![Page::new("https://a.com").with_last_modified(when)]);

        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "  <urlset schema=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
            "    <url>\n",
            "      <loc>https://a.com</loc>\n",
            "      <lastmod>2024-01-15</lastmod>\n",
            "    </url>\n",
            "  </urlset>",
        );
        assert_eq!(render(&crawl), expected);
    }

    #[test]
    fn test_missing_timestamp_omits_lastmod() {
        let crawl = Crawl::new(vec![Page::new("https://a.com/b")]);
        let output = render(&crawl);

        assert!(output.contains("<loc>https://a.com/b</loc>"));
        assert!(!output.contains("lastmod"));
    }

    #[test]
    fn test_epoch_timestamp_is_rendered() {
        let crawl = Crawl::new(vec![
            Page::new("https://a.com").with_last_modified(chrono::DateTime::<Utc>::UNIX_EPOCH),
        ]);
        assert!(render(&crawl).contains("<lastmod>1970-01-01</lastmod>"));
    }

    #[test]
    fn test_empty_crawl() {
        let expected = format!(
            "{XML_HEADER}  <urlset schema=\"{SITEMAP_SCHEMA}\"></urlset>"
        );
        assert_eq!(render(&Crawl::default()), expected);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("https://a.com/?a=1&b=<2>"),
            "https://a.com/?a=1&amp;b=&lt;2&gt;"
        );
        assert_eq!(escape_xml("\"it's\""), "&#34;it&#39;s&#34;");
        assert_eq!(escape_xml("a\tb\nc\rd"), "a&#x9;b&#xA;c&#xD;d");
        assert_eq!(escape_xml("bell\u{7}"), "bell\u{FFFD}");
        assert_eq!(escape_xml("caf\u{e9}"), "caf\u{e9}");
    }

    #[test]
    fn test_extension() {
        assert_eq!(XmlFormatter.extension(), "xml");
    }
}
