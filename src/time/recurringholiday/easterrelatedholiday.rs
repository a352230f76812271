use chrono::{Duration, NaiveDate};

use super::emiliani::shift_to_monday;
use super::recurringholiday::RecurringHoliday;

/// Western (Gregorian) Easter Sunday, by the anonymous Gregorian algorithm.
///
/// Valid for 1583..=4099; returns `None` outside that window.
pub fn western_easter(year: i32) -> Option<NaiveDate> {
    if !(1583..=4099).contains(&year) {
        return None;
    }

    let g = year % 19;
    let c = year / 100;
    let c_div_4 = c / 4;
    let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let h_div_28 = h / 28;
    let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
    // p may be slightly negative (e.g. 2008); the arithmetic must stay signed
    let p = i - j;

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// A holiday at a signed day offset from Easter Sunday of the same year.
/// When `emiliani` is set the observed date is moved to the following Monday.
#[derive(Clone, Copy)]
pub struct EasterRelatedHoliday {
    shift_days: i64,
    emiliani: bool,
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i64, emiliani: bool) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days, emiliani }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }

    pub fn emiliani(&self) -> bool {
        self.emiliani
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn holiday(&self, year: i32) -> Option<NaiveDate> {
        let d = western_easter(year)? + Duration::days(self.shift_days);
        if self.emiliani {
            Some(shift_to_monday(d))
        } else {
            Some(d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn easter_reference_dates() {
        assert_eq!(western_easter(2000), Some(date(2000, 4, 23)));
        assert_eq!(western_easter(2024), Some(date(2024, 3, 31)));
        assert_eq!(western_easter(2025), Some(date(2025, 4, 20)));
        assert_eq!(western_easter(1971), Some(date(1971, 4, 11)));
        assert_eq!(western_easter(2036), Some(date(2036, 4, 13)));
    }

    #[test]
    fn easter_with_negative_intermediate() {
        // 2008 drives the i - j term below zero
        assert_eq!(western_easter(2008), Some(date(2008, 3, 23)));
    }

    #[test]
    fn easter_outside_valid_range() {
        assert_eq!(western_easter(1000), None);
        assert_eq!(western_easter(4100), None);
    }

    #[test]
    fn good_friday_is_two_days_before_easter() {
        let rule = EasterRelatedHoliday::new(-2, false);
        assert_eq!(rule.holiday(2024), Some(date(2024, 3, 29)));
        assert_eq!(rule.holiday(2025), Some(date(2025, 4, 18)));
    }

    #[test]
    fn corpus_christi_moves_to_monday() {
        // Easter 2024 + 60 = Thursday May 30, observed June 3
        let rule = EasterRelatedHoliday::new(60, true);
        assert_eq!(rule.holiday(2024), Some(date(2024, 6, 3)));
    }

    #[test]
    fn ascension_already_on_monday_stays() {
        // Easter 2025 + 36 = Monday May 26
        let rule = EasterRelatedHoliday::new(36, true);
        assert_eq!(rule.holiday(2025), Some(date(2025, 5, 26)));
    }

    #[test]
    fn undefined_outside_easter_range() {
        let rule = EasterRelatedHoliday::new(-3, false);
        assert_eq!(rule.holiday(1500), None);
    }
}
