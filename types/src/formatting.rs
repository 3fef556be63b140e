//! Display formatting for money and dates.
//!
//! All user-facing numeric and date rendering goes through this module so
//! panels stay consistent. Prices use Indian-style digit grouping with the
//! rupee sign; timestamps are backend ISO-8601 strings and fall back to the
//! raw value when they do not parse.

use chrono::{DateTime, NaiveDate};

/// Group an unsigned integer string Indian-style: last three digits, then
/// pairs (`1500000` -> `15,00,000`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_chars: Vec<char> = head.chars().collect();
    let mut index = head_chars.len();
    while index > 0 {
        let start = index.saturating_sub(2);
        groups.push(head_chars[start..index].iter().collect());
        index = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Format an amount as rupees with no fraction digits, matching the site's
/// `en-IN` currency rendering.
pub fn format_rupees(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}\u{20B9}{}", group_indian(&digits))
}

/// Render an ISO-8601 timestamp or plain date as `12 Mar 2026`.
/// Unparseable input is shown as-is; the backend owns these strings.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

/// Render an ISO-8601 timestamp as `12 Mar 2026, 10:30`.
pub fn format_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d %b %Y, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Resolve a backend-relative media path (trip images, background) against
/// an origin. Absolute URLs pass through; an empty path stays empty rather
/// than resolving to the bare origin.
pub fn media_url(origin: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupee_grouping_is_indian_style() {
        assert_eq!(format_rupees(0.0), "\u{20B9}0");
        assert_eq!(format_rupees(500.0), "\u{20B9}500");
        assert_eq!(format_rupees(4000.0), "\u{20B9}4,000");
        assert_eq!(format_rupees(150000.0), "\u{20B9}1,50,000");
        assert_eq!(format_rupees(15000000.0), "\u{20B9}1,50,00,000");
        assert_eq!(format_rupees(-2500.0), "-\u{20B9}2,500");
    }

    #[test]
    fn fractional_amounts_round_to_whole_rupees() {
        assert_eq!(format_rupees(999.5), "\u{20B9}1,000");
        assert_eq!(format_rupees(999.4), "\u{20B9}999");
    }

    #[test]
    fn iso_timestamps_render_as_dates() {
        assert_eq!(format_date("2026-03-12T00:00:00.000Z"), "12 Mar 2026");
        assert_eq!(format_date("2026-03-12"), "12 Mar 2026");
    }

    #[test]
    fn datetime_includes_time() {
        assert_eq!(
            format_datetime("2026-02-01T10:30:00.000Z"),
            "01 Feb 2026, 10:30"
        );
    }

    #[test]
    fn unparseable_input_falls_back_to_raw() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_datetime(""), "");
    }

    #[test]
    fn media_paths_resolve_against_the_origin() {
        let origin = "https://backend.example.com";
        assert_eq!(
            media_url(origin, "/uploads/manali.jpg"),
            "https://backend.example.com/uploads/manali.jpg"
        );
        assert_eq!(
            media_url(origin, "uploads/manali.jpg"),
            "https://backend.example.com/uploads/manali.jpg"
        );
        assert_eq!(
            media_url(origin, "https://cdn.example.com/bg.mp4"),
            "https://cdn.example.com/bg.mp4"
        );
    }

    #[test]
    fn empty_media_path_stays_empty() {
        assert_eq!(media_url("https://backend.example.com", ""), "");
    }
}
