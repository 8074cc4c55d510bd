use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses the timestamp shapes the backend emits: RFC 3339, naive ISO 8601
/// (taken as UTC) or a bare date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(datetime) = raw.parse::<DateTime<Utc>>() {
        return Some(datetime);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Some(datetime) = parse_timestamp(iso_date) {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

// "Jan 05, 2024", or "Date unknown" when missing or unparseable
pub fn format_published_date(published: Option<&str>) -> String {
    published
        .and_then(parse_timestamp)
        .map(|datetime| datetime.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "Date unknown".to_string())
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn format_view_count(count: Option<u64>) -> String {
    match count {
        None | Some(0) => "0 views".to_string(),
        Some(count) if count >= 1_000_000 => format!("{:.1}M views", count as f64 / 1_000_000.0),
        Some(count) if count >= 1_000 => format!("{:.1}K views", count as f64 / 1_000.0),
        Some(count) => format!("{} views", count),
    }
}

pub fn format_dex_number(number: u32) -> String {
    format!("#{:03}", number)
}

pub fn or_not_available<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_backend_timestamp_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-05T10:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-05T10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-05T10:30:00.000"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-01-05"),
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparseable_timestamp_is_none() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn published_date_falls_back_to_unknown() {
        assert_eq!(format_published_date(Some("2024-03-09T08:00:00")), "Mar 09, 2024");
        assert_eq!(format_published_date(None), "Date unknown");
        assert_eq!(format_published_date(Some("soon")), "Date unknown");
    }

    #[test]
    fn iso_date_keeps_unparseable_input() {
        assert_eq!(format_iso8601_date("2024-03-09T08:00:00+02:00"), "2024-03-09");
        assert_eq!(format_iso8601_date("n/a"), "n/a");
    }

    #[test]
    fn number_gets_thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(123456), "123,456");
    }

    #[test]
    fn view_count_uses_compact_units() {
        assert_eq!(format_view_count(None), "0 views");
        assert_eq!(format_view_count(Some(0)), "0 views");
        assert_eq!(format_view_count(Some(950)), "950 views");
        assert_eq!(format_view_count(Some(1_500)), "1.5K views");
        assert_eq!(format_view_count(Some(2_340_000)), "2.3M views");
    }

    #[test]
    fn dex_number_is_zero_padded() {
        assert_eq!(format_dex_number(7), "#007");
        assert_eq!(format_dex_number(150), "#150");
        assert_eq!(format_dex_number(1010), "#1010");
    }

    #[test]
    fn missing_values_read_as_not_available() {
        assert_eq!(or_not_available(Some(1500)), "1500");
        assert_eq!(or_not_available::<i64>(None), "N/A");
    }
}
