use chrono::{Datelike, NaiveDate};

pub trait RecurringHoliday {
    /// Returns the observed date of this holiday for the given year, or
    /// `None` when the rule is undefined there (e.g. Easter out of range).
    fn holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.holiday(d.year()) == Some(*d)
    }
}
