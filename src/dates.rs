// 📅 Date Normalizer - Best-effort year extraction and display formatting
// The source corpus mixes ISO dates, art-historical ranges ("1503/1519"),
// and circa phrasing. Contract: never fail, degrade to passthrough.

use chrono::{Month, NaiveDate};

// ============================================================================
// YEAR EXTRACTION
// ============================================================================

/// Extract a comparable year from heterogeneous date text.
///
/// Rules, tried in order, first match wins:
/// 1. Leading 4-digit run ("1503/1519" → 1503)
/// 2. "c." / "circa" followed by a 4-digit year ("c. 1503" → 1503)
/// 3. Any standalone 4-digit run ("painted in 1503" → 1503)
/// 4. No match → None
pub fn extract_year(text: &str) -> Option<i32> {
    let text = text.trim();
    let bytes = text.as_bytes();

    // 1. Leading 4-digit run
    if bytes.len() >= 4 && bytes[..4].iter().all(u8::is_ascii_digit) {
        return text[..4].parse().ok();
    }

    // 2. Circa marker followed by a year
    let lower = text.to_ascii_lowercase();
    for marker in ["circa", "c."] {
        if let Some(pos) = lower.find(marker) {
            let rest = &text[pos + marker.len()..];
            if let Some(year) = first_standalone_run(rest) {
                return Some(year);
            }
        }
    }

    // 3. Standalone 4-digit run anywhere
    first_standalone_run(text)
}

/// First digit run of exactly 4 characters, parsed as a year
fn first_standalone_run(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i - start == 4 {
                return text[start..i].parse().ok();
            }
        } else {
            i += 1;
        }
    }

    None
}

// ============================================================================
// DISPLAY FORMATTING
// ============================================================================

/// Format an ISO-like date for display.
///
/// - "1838-05-15" → "May 15, 1838"
/// - "1838-05"    → "May 1838"
/// - "1838"       → "1838" (unchanged)
/// - anything unrecognized (bad month, bad day, free text) → input unchanged
///
/// A time component ("1838-05-15T00:00:00") is stripped before matching.
pub fn format_date(iso_like: &str) -> String {
    let date_part = iso_like.split('T').next().unwrap_or(iso_like);
    let parts: Vec<&str> = date_part.split('-').collect();

    match parts.as_slice() {
        [year, month, day] => match format_full_date(year, month, day) {
            Some(formatted) => formatted,
            None => iso_like.to_string(),
        },
        [year, month] => match format_year_month(year, month) {
            Some(formatted) => formatted,
            None => iso_like.to_string(),
        },
        // Bare year or anything else: passthrough
        _ => iso_like.to_string(),
    }
}

fn format_full_date(year: &str, month: &str, day: &str) -> Option<String> {
    let y = parse_year(year)?;
    let m: u32 = month.parse().ok()?;
    let d: u32 = day.parse().ok()?;

    // Rejects month 13, day 32, Feb 30, ...
    NaiveDate::from_ymd_opt(y, m, d)?;
    let name = Month::try_from(m as u8).ok()?.name();

    Some(format!("{} {}, {}", name, d, year))
}

fn format_year_month(year: &str, month: &str) -> Option<String> {
    parse_year(year)?;
    let m: u32 = month.parse().ok()?;
    if !(1..=12).contains(&m) {
        return None;
    }
    let name = Month::try_from(m as u8).ok()?.name();

    Some(format!("{} {}", name, year))
}

fn parse_year(year: &str) -> Option<i32> {
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        year.parse().ok()
    } else {
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year_leading_digits() {
        assert_eq!(extract_year("1503"), Some(1503));
        assert_eq!(extract_year("1503/1519"), Some(1503));
        assert_eq!(extract_year("1891-04-12"), Some(1891));
    }

    #[test]
    fn test_extract_year_circa_phrasing() {
        assert_eq!(extract_year("c. 1503"), Some(1503));
        assert_eq!(extract_year("circa 1503/1519"), Some(1503));
        assert_eq!(extract_year("Circa 1860"), Some(1860));
    }

    #[test]
    fn test_extract_year_standalone_run() {
        assert_eq!(extract_year("painted in 1503"), Some(1503));
        assert_eq!(extract_year("late 1891, Paris"), Some(1891));
    }

    #[test]
    fn test_extract_year_no_match() {
        assert_eq!(extract_year("unknown"), None);
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("15th century"), None);
    }

    #[test]
    fn test_format_date_full() {
        assert_eq!(format_date("1838-05-15"), "May 15, 1838");
        assert_eq!(format_date("1452-04-15"), "April 15, 1452");
        // Day loses its zero padding
        assert_eq!(format_date("1838-05-05"), "May 5, 1838");
    }

    #[test]
    fn test_format_date_strips_time_component() {
        assert_eq!(format_date("1838-05-15T00:00:00Z"), "May 15, 1838");
    }

    #[test]
    fn test_format_date_year_month() {
        assert_eq!(format_date("1838-05"), "May 1838");
        assert_eq!(format_date("1919-12"), "December 1919");
    }

    #[test]
    fn test_format_date_bare_year_unchanged() {
        assert_eq!(format_date("1838"), "1838");
    }

    #[test]
    fn test_format_date_passthrough_on_garbage() {
        assert_eq!(format_date("garbage"), "garbage");
        assert_eq!(format_date("c. 1503"), "c. 1503");
        // Out-of-range components degrade to passthrough, not failure
        assert_eq!(format_date("1838-13"), "1838-13");
        assert_eq!(format_date("1838-02-30"), "1838-02-30");
    }
}
