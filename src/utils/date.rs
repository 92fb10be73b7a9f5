use chrono::{Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The last `days` calendar days ending at `end`, ascending.
///
/// `trailing_days(2024-01-07, 7)` yields 2024-01-01 ..= 2024-01-07.
pub fn trailing_days(end: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days)
        .rev()
        .map(|offset| end - Duration::days(offset as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_days_ascending_and_inclusive() {
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let days = trailing_days(end, 7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(days[6], end);
    }

    #[test]
    fn trailing_days_crosses_month_boundary() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let days = trailing_days(end, 4);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(days[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2024-13-40").is_none());
        assert!(parse_date("yesterday").is_none());
        assert_eq!(
            parse_date("2024-06-01"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }
}
