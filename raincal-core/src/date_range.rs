use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive). Used to build the trailing
/// historical window.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_iteration() {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let dates: Vec<NaiveDate> = DateRange(start, end).collect();
        assert_eq!(dates.len(), 15);
        assert_eq!(dates[0], start);
        assert_eq!(dates[14], end);
    }

    #[test]
    fn test_date_range_single_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let dates: Vec<NaiveDate> = DateRange(day, day).collect();
        assert_eq!(dates, vec![day]);
    }

    #[test]
    fn test_date_range_empty() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        assert_eq!(DateRange(start, end).count(), 0);
    }
}
