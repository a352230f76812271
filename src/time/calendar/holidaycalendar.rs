use chrono::{Datelike, NaiveDate, Weekday};

pub trait HolidayCalendar {
    /// Returns `true` if `d` is a public holiday. Weekends are a separate
    /// concern, see [`HolidayCalendar::is_weekend`].
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_holiday_or_weekend(&self, d: NaiveDate) -> bool {
        self.is_holiday(d) || self.is_weekend(d)
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_holiday_or_weekend(d)
    }
}
