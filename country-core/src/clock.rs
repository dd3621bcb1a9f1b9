//! Local time for a `UTC±HH:MM` offset string.

use chrono::{DateTime, FixedOffset, Utc};

pub const INVALID_TIMEZONE: &str = "Invalid Timezone";

/// Parse `UTC` or `UTC±HH:MM` into a fixed offset.
pub fn parse_utc_offset(offset: &str) -> Option<FixedOffset> {
    let rest = offset.strip_prefix("UTC")?;
    if rest.is_empty() {
        return FixedOffset::east_opt(0);
    }

    let mut chars = rest.chars();
    let sign = match chars.next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let (hours, minutes) = chars.as_str().split_once(':')?;
    let hours = two_digits(hours)?;
    let minutes = two_digits(minutes)?;
    FixedOffset::east_opt(sign * (hours * 60 + minutes) * 60)
}

fn two_digits(field: &str) -> Option<i32> {
    if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Wall-clock time at `offset`, formatted `hh:mm:ss AM`.
///
/// Malformed offsets render [`INVALID_TIMEZONE`] instead of failing.
pub fn time_at_offset(offset: &str, now: DateTime<Utc>) -> String {
    match parse_utc_offset(offset) {
        Some(offset) => now.with_timezone(&offset).format("%I:%M:%S %p").to_string(),
        None => INVALID_TIMEZONE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn plain_utc_is_zero_offset() {
        assert_eq!(time_at_offset("UTC", noon()), "12:00:00 PM");
    }

    #[test]
    fn positive_offset_with_minutes() {
        assert_eq!(time_at_offset("UTC+05:30", noon()), "05:30:00 PM");
    }

    #[test]
    fn negative_offset_crosses_into_morning() {
        assert_eq!(time_at_offset("UTC-10:00", noon()), "02:00:00 AM");
    }

    #[test]
    fn offsets_wrap_past_midnight() {
        let late = Utc.with_ymd_and_hms(2024, 3, 1, 23, 15, 5).unwrap();
        assert_eq!(time_at_offset("UTC+01:00", late), "12:15:05 AM");
    }

    #[test]
    fn malformed_offsets_render_invalid() {
        for offset in ["GMT+1", "UTC+5", "UTC+05", "UTC*05:00", "UTC+0a:00", "", "utc"] {
            assert_eq!(time_at_offset(offset, noon()), INVALID_TIMEZONE, "{offset:?}");
        }
    }

    #[test]
    fn out_of_range_offset_is_invalid() {
        assert!(parse_utc_offset("UTC+24:00").is_none());
        assert_eq!(
            parse_utc_offset("UTC-03:30"),
            FixedOffset::west_opt(3 * 3600 + 30 * 60)
        );
    }
}
