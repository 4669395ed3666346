use crate::error::PickerError;
use crate::grid::days_in_month;
use crate::locale::Locale;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar day: year, zero-based month and day of month.
///
/// Only the day matters; two dates built from different times on the same
/// day compare equal. Ordering is chronological.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct CalendarDate {
    year: i32,
    month0: u32,
    day: u32,
}

impl CalendarDate {
    /// Create a CalendarDate from a year, a zero-based month and a day of month.
    /// Returns None when the triple does not name a day of the proleptic
    /// Gregorian calendar.
    pub fn from_ymd_opt(year: i32, month0: u32, day: u32) -> Option<CalendarDate> {
        if month0 > 11 || day == 0 || day > days_in_month(year, month0 as i32) {
            return None;
        }
        Some(CalendarDate { year, month0, day })
    }

    /// Same as `from_ymd_opt`, reporting the rejected triple as an error.
    pub fn try_from_ymd(year: i32, month0: u32, day: u32) -> Result<CalendarDate, PickerError> {
        CalendarDate::from_ymd_opt(year, month0, day).ok_or(PickerError::InvalidDate {
            year,
            month: month0 + 1,
            day,
        })
    }

    /// Grid cells are produced from already-normalized arithmetic.
    pub(crate) fn from_parts_unchecked(year: i32, month0: u32, day: u32) -> CalendarDate {
        debug_assert!(month0 < 12 && day >= 1 && day <= days_in_month(year, month0 as i32));
        CalendarDate { year, month0, day }
    }

    /// Today according to the local clock.
    pub fn today() -> CalendarDate {
        let now: DateTime<Local> = Local::now();
        now.date_naive().into()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month, January = 0.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month, January = 1.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Convert to a NaiveDate. None only for years outside chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), self.day)
    }

    /// Format the date the way the locale writes short dates natively.
    pub fn format_localized(&self, locale: Locale) -> String {
        match self.to_naive_date() {
            Some(naive) => naive.format(locale.entry().date_format).to_string(),
            None => self.to_string(),
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        CalendarDate {
            year: value.year(),
            month0: value.month0(),
            day: value.day(),
        }
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        value.date().into()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month(), self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = PickerError;

    /// Parse a date string in "YYYY-MM-DD" format. The year may carry a sign
    /// and any number of digits, so every `Display` output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let parse_error = || PickerError::DateParse(raw.to_string());
        let mut parts = raw.rsplitn(3, '-');
        let day = parts.next().ok_or_else(parse_error)?;
        let month = parts.next().ok_or_else(parse_error)?;
        let year = parts.next().ok_or_else(parse_error)?;
        let all_digits =
            |field: &str| !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit());
        let year_digits = year.strip_prefix(['-', '+']).unwrap_or(year);
        if !all_digits(year_digits) || !all_digits(month) || !all_digits(day) {
            return Err(parse_error());
        }
        let year: i32 = year.parse().map_err(|_| parse_error())?;
        let month: u32 = month.parse().map_err(|_| parse_error())?;
        let day: u32 = day.parse().map_err(|_| parse_error())?;
        if month == 0 {
            return Err(PickerError::InvalidDate { year, month, day });
        }
        CalendarDate::try_from_ymd(year, month - 1, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::CalendarDate;
    use crate::error::PickerError;
    use crate::locale::Locale;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_from_ymd_opt_validates() {
        assert!(CalendarDate::from_ymd_opt(2024, 1, 29).is_some());
        assert!(CalendarDate::from_ymd_opt(2023, 1, 29).is_none());
        assert!(CalendarDate::from_ymd_opt(2024, 12, 1).is_none());
        assert!(CalendarDate::from_ymd_opt(2024, 0, 0).is_none());
        assert!(CalendarDate::from_ymd_opt(2024, 3, 31).is_none());
    }

    #[test]
    fn test_try_from_ymd_reports_one_based_month() {
        let err = CalendarDate::try_from_ymd(2023, 1, 30).unwrap_err();
        assert_eq!(
            err,
            PickerError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            }
        );
        assert_eq!(err.to_string(), "Invalid calendar date: 2023-02-30");
    }

    #[test]
    fn test_naive_date_conversion() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let date: CalendarDate = naive.into();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month0(), 2);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 15);
        assert_eq!(date.to_naive_date(), Some(naive));
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let morning = day.and_time(NaiveTime::from_hms_opt(0, 0, 1).unwrap());
        let evening = day.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(CalendarDate::from(morning), CalendarDate::from(evening));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = CalendarDate::from_ymd_opt(2023, 11, 31).unwrap();
        let b = CalendarDate::from_ymd_opt(2024, 0, 1).unwrap();
        let c = CalendarDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_format_and_parse() {
        let date = CalendarDate::from_ymd_opt(2023, 5, 5).unwrap();
        assert_eq!(date.to_string(), "2023-06-05");
        assert_eq!("2023-06-05".parse::<CalendarDate>().unwrap(), date);
        assert!(matches!(
            "06/05/2023".parse::<CalendarDate>(),
            Err(PickerError::DateParse(_))
        ));
        assert!(matches!(
            "2023-6-x".parse::<CalendarDate>(),
            Err(PickerError::DateParse(_))
        ));
        assert_eq!(
            "2023-02-30".parse::<CalendarDate>(),
            Err(PickerError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            })
        );
        assert!(matches!(
            "2023-00-10".parse::<CalendarDate>(),
            Err(PickerError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_text_form_round_trips_for_wide_years() {
        for (year, month0, day) in [
            (12345, 0, 1),
            (300_000, 1, 29),
            (-44, 2, 15),
            (-12345, 11, 31),
            (7, 6, 4),
            (i32::MAX, 11, 31),
            (i32::MIN, 0, 1),
        ] {
            let date = CalendarDate::from_ymd_opt(year, month0, day).unwrap();
            let text = date.to_string();
            assert_eq!(text.parse::<CalendarDate>(), Ok(date), "{text}");
        }
        assert_eq!(
            CalendarDate::from_ymd_opt(12345, 0, 1).unwrap().to_string(),
            "12345-01-01"
        );
        assert_eq!(
            "+2024-03-15".parse::<CalendarDate>(),
            Ok(CalendarDate::from_ymd_opt(2024, 2, 15).unwrap())
        );
    }

    #[test]
    fn test_format_localized() {
        let date = CalendarDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(date.format_localized(Locale::En), "05/03/2024");
        assert_eq!(date.format_localized(Locale::Fr), "05/03/2024");
    }

    #[test]
    fn test_serde_uses_iso_string() {
        let date = CalendarDate::from_ymd_opt(2024, 11, 25).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-12-25\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<CalendarDate>("\"2024-13-01\"").is_err());

        let far = CalendarDate::from_ymd_opt(300_000, 0, 1).unwrap();
        let json = serde_json::to_string(&far).unwrap();
        assert_eq!(json, "\"300000-01-01\"");
        assert_eq!(serde_json::from_str::<CalendarDate>(&json).unwrap(), far);
    }
}
