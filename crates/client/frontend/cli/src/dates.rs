//! Date arguments accepted on the command line.

use chrono::NaiveDate;

/// Parses `m/d/yy`, `m/d/yyyy`, or `yyyy-mm-dd`.
///
/// Two-digit years 69-99 map to the 1900s and 00-68 to the 2000s.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Some(date);
    }

    let parts: Vec<&str> = token.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };
    if !parts
        .iter()
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let month = month.parse().ok()?;
    let day = day.parse().ok()?;
    let year: i32 = match year.len() {
        2 => match year.parse::<i32>().ok()? {
            short @ 69.. => 1900 + short,
            short => 2000 + short,
        },
        4 => year.parse().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn accepts_slash_and_iso_forms() {
        assert_eq!(parse_date("1/25/23"), ymd(2023, 1, 25));
        assert_eq!(parse_date("01/05/2023"), ymd(2023, 1, 5));
        assert_eq!(parse_date("12/31/99"), ymd(1999, 12, 31));
        assert_eq!(parse_date("2023-01-25"), ymd(2023, 1, 25));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_date("2/30/23"), None);
        assert_eq!(parse_date("1/25"), None);
        assert_eq!(parse_date("1/25/023"), None);
        assert_eq!(parse_date("1/-2/23"), None);
        assert_eq!(parse_date("today"), None);
        assert_eq!(parse_date("1/2/3/4"), None);
    }
}
