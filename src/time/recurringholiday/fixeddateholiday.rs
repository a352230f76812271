use chrono::NaiveDate;

use super::emiliani::shift_to_monday;
use super::recurringholiday::RecurringHoliday;

/// A civil holiday on a fixed month/day. When `emiliani` is set the
/// observed date is moved to the following Monday.
#[derive(Clone, Copy)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    emiliani: bool,
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, emiliani: bool) -> FixedDateHoliday {
        FixedDateHoliday { month, day, emiliani }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn emiliani(&self) -> bool {
        self.emiliani
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn holiday(&self, year: i32) -> Option<NaiveDate> {
        let d = NaiveDate::from_ymd_opt(year, self.month, self.day)?;
        if self.emiliani {
            Some(shift_to_monday(d))
        } else {
            Some(d)
        }
    }
}
