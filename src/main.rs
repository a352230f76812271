use chrono::Local;

use festivos::time::calendar::colombiancalendar::ColombianCalendar;
use festivos::time::calendar::holidaycalendar::HolidayCalendar;

fn main() {
    let now = Local::now().naive_local();
    let today = now.date();
    let calendar = ColombianCalendar::new(today);

    println!("today:          {}", today);
    println!("holiday:        {}", calendar.is_holiday(today));
    println!("weekend:        {}", calendar.is_weekend(today));
    println!("business day:   {}", calendar.is_business_day(today));
    println!("next work day:  {}", calendar.next_work_day(now));
    println!("upcoming holidays:");
    for d in calendar.next_holidays(today) {
        println!("  {}", d);
    }
}
