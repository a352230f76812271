use chrono::{Datelike, Days, NaiveDate};

/// Moves a date that is not a Monday to the following Monday in the
/// calendar. Applied to the holidays covered by the Emiliani law.
///
/// A Monday is returned unchanged; any other day advances forward, rolling
/// over month and year boundaries as needed.
pub fn shift_to_monday(d: NaiveDate) -> NaiveDate {
    // Days past the most recent Monday: Mon=0, Tue=1, ..., Sun=6
    let from_monday = d.weekday().num_days_from_monday();
    if from_monday == 0 {
        d
    } else {
        d + Days::new((7 - from_monday) as u64)
    }
}
