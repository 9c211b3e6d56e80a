use once_cell::sync::Lazy;
use regex::Regex;

/// Marker for "no delivery time specified in the source document". Keeps the
/// order visible instead of hiding it.
pub const SENTINEL_CLOCK: &str = "23:59";

/// 1-2 hour digits, ':' or '.' separator, exactly 2 minute digits.
static CLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})[:.](\d{2})").unwrap());

/// Thai "afternoon N" phrase, e.g. "บ่าย 3" meaning 15:00.
static AFTERNOON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"บ่าย\s*(\d{1,2})").unwrap());

/// Best-effort delivery clock time from a free-text remarks field. Total
/// function: always yields an `HH:MM` string, falling back to the sentinel.
///
/// Matchers run in priority order and the first hit wins. Values are passed
/// through without range validation; out-of-range output (e.g. "25:00" from
/// "บ่าย 13") is absorbed downstream by the resolver's sentinel fallback.
pub fn extract(remarks: Option<&str>) -> String {
    let text = match remarks {
        Some(t) if !t.is_empty() => t,
        _ => return SENTINEL_CLOCK.to_string(),
    };

    let matchers: [fn(&str) -> Option<String>; 2] = [match_clock, match_afternoon];
    matchers
        .iter()
        .find_map(|matcher| matcher(text))
        .unwrap_or_else(|| SENTINEL_CLOCK.to_string())
}

/// Explicit clock notation: "14:30", "9.05". Hour is zero-padded, minutes are
/// kept verbatim.
fn match_clock(text: &str) -> Option<String> {
    let caps = CLOCK_RE.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    Some(format!("{:02}:{}", hour, &caps[2]))
}

/// Localized afternoon phrase: "บ่าย 3" -> "15:00". N is not bounds-checked.
fn match_afternoon(text: &str) -> Option<String> {
    let caps = AFTERNOON_RE.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    Some(format!("{:02}:00", hour + 12))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_missing_remarks_yields_sentinel() {
        assert_eq!(extract(None), "23:59");
        assert_eq!(extract(Some("")), "23:59");
    }

    #[test]
    fn test_extract_colon_notation() {
        assert_eq!(extract(Some("delivery at 14:30")), "14:30");
    }

    #[test]
    fn test_extract_period_notation_pads_hour() {
        assert_eq!(extract(Some("9.05 pickup")), "09:05");
    }

    #[test]
    fn test_extract_afternoon_phrase() {
        assert_eq!(extract(Some("ส่ง บ่าย 3")), "15:00");
        assert_eq!(extract(Some("บ่าย3")), "15:00");
    }

    #[test]
    fn test_extract_afternoon_overflow_passes_through() {
        // Unchecked addition; the resolver falls back to the sentinel later.
        assert_eq!(extract(Some("บ่าย 13")), "25:00");
    }

    #[test]
    fn test_extract_no_time_info_yields_sentinel() {
        assert_eq!(extract(Some("no time info here")), "23:59");
    }

    #[test]
    fn test_extract_clock_wins_over_afternoon() {
        // First matching rule applies, not best match.
        assert_eq!(extract(Some("บ่าย 3 หรือ 10:15")), "10:15");
    }

    #[test]
    fn test_extract_minutes_not_validated() {
        assert_eq!(extract(Some("around 9.75")), "09:75");
    }
}
