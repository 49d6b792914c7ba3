//! Text cleanup helpers for legacy field values.
//!
//! Legacy free-text columns carry ad-hoc HTML fragments, inconsistent
//! whitespace, and composite strings (semicolon-separated artists,
//! comma-joined coordinates). These helpers normalize them before the
//! records reach a write strategy.

/// Remove HTML tags, decode the common entities, and collapse whitespace.
/// Used for internal names and other plain-text target columns.
pub fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    let decoded = out
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to `max` characters, appending an ellipsis when cut. Returns
/// the truncated string and whether truncation happened.
pub fn truncate(input: &str, max: usize) -> (String, bool) {
    if input.chars().count() <= max {
        return (input.to_string(), false);
    }
    let cut: String = input.chars().take(max.saturating_sub(3)).collect();
    (format!("{cut}..."), true)
}

/// Parse a legacy `"lat,lng"` coordinate string.
pub fn parse_geo_coordinates(input: &str) -> Option<(f64, f64)> {
    let (lat, lng) = input.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some((lat, lng))
}

/// Split a legacy tag column into individual tag names.
///
/// Values containing a colon are structured data (e.g. "binding: leather")
/// and are kept as a single tag; otherwise the value splits on commas and
/// semicolons.
pub fn parse_tag_string(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.contains(':') {
        return vec![trimmed.to_string()];
    }
    trimmed
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a semicolon-separated list of names (legacy artist columns).
pub fn split_names(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
