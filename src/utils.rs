/// Convert a URL to a sanitized filename
pub fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let mut name = url.replace("http://", "").replace("https://", "");
    name = name.trim_end_matches('/').to_string();
    name = name.replace(['/', ':', '?', '&', '=', '#', '%'], "_");

    if name.is_empty() {
        return "crawl".to_string();
    }

    // Limit filename length without splitting a character
    match name.char_indices().nth(100) {
        Some((end, _)) => name[..end].to_string(),
        None => name,
    }
}

/// File name for a document rendered from a crawl of `base_url`
pub fn output_filename(base_url: &str, extension: &str) -> String {
    format!("{}.{}", sanitize_filename(base_url), extension)
}
