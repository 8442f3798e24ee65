//! Presentation helpers shared by the pages: dates, phone numbers, and the
//! odd Uzbek label. Pure string work, no browser APIs.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Render a backend timestamp as `dd.MM.yyyy` (optionally with `HH:mm`).
/// Accepts RFC 3339, naive datetimes, and bare dates; anything else is
/// passed through untouched, absence renders as "-".
pub fn format_date(value: Option<&str>, include_time: bool) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return render(parsed.naive_local(), include_time);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return render(parsed, include_time);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%d.%m.%Y").to_string();
    }

    raw.to_string()
}

fn render(value: NaiveDateTime, include_time: bool) -> String {
    if include_time {
        value.format("%d.%m.%Y %H:%M").to_string()
    } else {
        value.format("%d.%m.%Y").to_string()
    }
}

/// Normalize a phone number to the Uzbek display form
/// `+998 XX XXX XX XX`. Local forms (`0XXYYYZZTT`, `XXYYYZZTT`) are
/// upgraded to the country code; anything unrecognized is returned as-is.
pub fn format_uz_phone(phone: Option<&str>) -> String {
    let Some(raw) = phone.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };

    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 && digits.starts_with('0') {
        digits.remove(0);
    }
    if digits.len() == 9 && !digits.starts_with("998") {
        digits = format!("998{digits}");
    }

    if digits.starts_with("998") && digits.len() >= 12 {
        let d = &digits[..12];
        return format!(
            "+{} {} {} {} {}",
            &d[0..3],
            &d[3..5],
            &d[5..8],
            &d[8..10],
            &d[10..12]
        );
    }

    raw.to_string()
}

/// Course year label; the fifth year means graduated.
pub fn course_year_label(course_year: i64) -> String {
    match course_year {
        n if n <= 0 => "-".to_string(),
        5 => "Bitirgan".to_string(),
        n => format!("{n}-kurs"),
    }
}

/// Coverage percentage with one decimal, e.g. `83.3%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(
            format_date(Some("2026-01-15T09:30:00+05:00"), false),
            "15.01.2026"
        );
        assert_eq!(
            format_date(Some("2026-01-15T09:30:00+05:00"), true),
            "15.01.2026 09:30"
        );
    }

    #[test]
    fn test_format_date_naive_and_bare() {
        assert_eq!(
            format_date(Some("2025-12-31T23:59:59.123456"), true),
            "31.12.2025 23:59"
        );
        assert_eq!(format_date(Some("2003-06-01"), false), "01.06.2003");
    }

    #[test]
    fn test_format_date_passthrough_and_absent() {
        assert_eq!(format_date(None, false), "-");
        assert_eq!(format_date(Some(""), false), "-");
        assert_eq!(format_date(Some("kecha"), false), "kecha");
    }

    #[test]
    fn test_format_uz_phone_full_international() {
        assert_eq!(
            format_uz_phone(Some("+998901234567")),
            "+998 90 123 45 67"
        );
        assert_eq!(
            format_uz_phone(Some("998 (90) 123-45-67")),
            "+998 90 123 45 67"
        );
    }

    #[test]
    fn test_format_uz_phone_local_forms() {
        assert_eq!(format_uz_phone(Some("0901234567")), "+998 90 123 45 67");
        assert_eq!(format_uz_phone(Some("901234567")), "+998 90 123 45 67");
    }

    #[test]
    fn test_format_uz_phone_unrecognized() {
        assert_eq!(format_uz_phone(Some("+39 011 090 6111")), "+39 011 090 6111");
        assert_eq!(format_uz_phone(None), "-");
        assert_eq!(format_uz_phone(Some("  ")), "-");
    }

    #[test]
    fn test_course_year_labels() {
        assert_eq!(course_year_label(0), "-");
        assert_eq!(course_year_label(1), "1-kurs");
        assert_eq!(course_year_label(4), "4-kurs");
        assert_eq!(course_year_label(5), "Bitirgan");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(83.333), "83.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
