const HREF_MARKER: &str = "href=";
const SVG_MARKER: &str = ".svg";

/// Extracts image URLs from a listing page, one candidate per line.
///
/// A line qualifies when it mentions `marker` and `svg`. The path runs from
/// just past `href="` to the end of the first `.svg`, and is appended to
/// `base_url` as-is. Lines that do not yield a non-empty path are skipped.
pub fn parse_listing(body: &str, base_url: &str, marker: &str) -> Vec<String> {
    body.lines()
        .filter(|line| line.contains(marker) && line.contains("svg"))
        .filter_map(extract_path)
        .map(|path| format!("{base_url}{path}"))
        .collect()
}

fn extract_path(line: &str) -> Option<&str> {
    let start = line.find(HREF_MARKER)? + HREF_MARKER.len() + 1;
    let end = line.find(SVG_MARKER)? + SVG_MARKER.len();
    if start >= end {
        return None;
    }
    line.get(start..end)
}
