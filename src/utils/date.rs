use chrono::{DateTime, Utc};

use crate::consts::BUILD_DATE_FORMAT;

/// Format a UTC instant for the `BUILD_DATE` build argument
pub(crate) fn format_build_date(now: DateTime<Utc>) -> String {
    now.format(BUILD_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn formats_with_z_suffix() {
        let now = Utc.with_ymd_and_hms(2026, 2, 6, 9, 5, 3).unwrap();
        assert_eq!(format_build_date(now), "2026-02-06T09:05:03Z");
    }

    #[test]
    fn drops_subsecond_precision() {
        let now = "2026-02-06T23:59:59.987654Z"
            .parse::<DateTime<Utc>>()
            .unwrap();
        assert_eq!(format_build_date(now), "2026-02-06T23:59:59Z");
    }

    #[test]
    fn current_time_has_fixed_width_and_parses_back() {
        let now = Utc::now();
        let formatted = format_build_date(now);
        assert_eq!(formatted.len(), 20);
        let parsed = NaiveDateTime::parse_from_str(&formatted, BUILD_DATE_FORMAT)
            .unwrap()
            .and_utc();
        assert!((now - parsed).num_seconds().abs() <= 1);
    }
}
