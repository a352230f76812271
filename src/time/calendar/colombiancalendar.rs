use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::ops::Bound;
use std::rc::Rc;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// The holiday rules are only defined within this year range; generation
/// requests outside it fall back to the calendar's construction year.
pub const FIRST_SUPPORTED_YEAR: i32 = 1971;
pub const LAST_SUPPORTED_YEAR: i32 = 2036;

const ONE_DAY: Days = Days::new(1);

/// The 18 rules of the Colombian public-holiday law.
pub fn colombian_rules() -> Vec<Rc<dyn RecurringHoliday>> {
    vec![
        // Fixed civil dates
        Rc::new(FixedDateHoliday::new(1, 1, false)),   // Año Nuevo
        Rc::new(FixedDateHoliday::new(5, 1, false)),   // Día del Trabajo
        Rc::new(FixedDateHoliday::new(7, 20, false)),  // Independencia
        Rc::new(FixedDateHoliday::new(8, 7, false)),   // Batalla de Boyacá
        Rc::new(FixedDateHoliday::new(12, 8, false)),  // Inmaculada Concepción
        Rc::new(FixedDateHoliday::new(12, 25, false)), // Navidad
        // Emiliani law: observed on the following Monday
        Rc::new(FixedDateHoliday::new(1, 6, true)),    // Reyes Magos
        Rc::new(FixedDateHoliday::new(3, 19, true)),   // San José
        Rc::new(FixedDateHoliday::new(6, 29, true)),   // San Pedro y San Pablo
        Rc::new(FixedDateHoliday::new(8, 15, true)),   // Asunción de la Virgen
        Rc::new(FixedDateHoliday::new(10, 12, true)),  // Día de la Raza
        Rc::new(FixedDateHoliday::new(11, 1, true)),   // Todos los Santos
        Rc::new(FixedDateHoliday::new(11, 11, true)),  // Independencia de Cartagena
        // Relative to Easter Sunday
        Rc::new(EasterRelatedHoliday::new(-3, false)), // Jueves Santo
        Rc::new(EasterRelatedHoliday::new(-2, false)), // Viernes Santo
        Rc::new(EasterRelatedHoliday::new(36, true)),  // Ascensión del Señor
        Rc::new(EasterRelatedHoliday::new(60, true)),  // Corpus Christi
        Rc::new(EasterRelatedHoliday::new(68, true)),  // Sagrado Corazón
    ]
}

struct CalendarState {
    // BTreeSet keeps the holiday list sorted and collapses duplicate dates
    // produced by distinct rules (e.g. Jun 30, 2025)
    holidays: BTreeSet<NaiveDate>,
    generated_years: HashSet<i32>,
}

/// Cached Colombian holiday calendar.
///
/// Holds the holiday set for every year generated so far; coverage grows
/// lazily as queries reach new years and is never evicted. Construct one
/// instance at startup and share it; "now" is always an explicit argument
/// so the queries stay deterministic.
pub struct ColombianCalendar {
    rules: Vec<Rc<dyn RecurringHoliday>>,
    state: RefCell<CalendarState>,
    base_year: i32,
}

impl ColombianCalendar {
    /// Creates a calendar with the built-in Colombian rule table, populated
    /// for the year of `today`.
    pub fn new(today: NaiveDate) -> ColombianCalendar {
        ColombianCalendar::with_rules(colombian_rules(), today)
    }

    /// Creates a calendar from an explicit rule list (see
    /// [`crate::configuration`]).
    pub fn with_rules(rules: Vec<Rc<dyn RecurringHoliday>>, today: NaiveDate) -> ColombianCalendar {
        let calendar = ColombianCalendar {
            rules,
            state: RefCell::new(CalendarState {
                holidays: BTreeSet::new(),
                generated_years: HashSet::new(),
            }),
            base_year: today.year(),
        };
        calendar.ensure_year(calendar.base_year);
        calendar
    }

    fn normalized_year(&self, year: i32) -> i32 {
        if (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year) {
            year
        } else {
            self.base_year
        }
    }

    /// Generates and caches the holiday set for `year` if not yet covered.
    fn ensure_year(&self, year: i32) {
        let year = self.normalized_year(year);
        let mut state = self.state.borrow_mut();
        if !state.generated_years.insert(year) {
            return;
        }
        for rule in &self.rules {
            if let Some(d) = rule.holiday(year) {
                state.holidays.insert(d);
            }
        }
    }

    /// All holidays of the given year, ascending.
    pub fn holidays_in_year(&self, year: i32) -> Vec<NaiveDate> {
        let year = self.normalized_year(year);
        self.ensure_year(year);
        let state = self.state.borrow();
        state
            .holidays
            .iter()
            .copied()
            .filter(|d| d.year() == year)
            .collect()
    }

    /// The next available working day, starting at `now.date()` itself.
    ///
    /// A Friday after 18:00 counts as already non-working, so the scan
    /// starts on Saturday.
    pub fn next_work_day(&self, now: NaiveDateTime) -> NaiveDate {
        let mut d = now.date();
        let friday_evening = d.weekday() == Weekday::Fri
            && now.time() > NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let mut non_working = friday_evening || self.is_holiday_or_weekend(d);
        while non_working {
            d = d + ONE_DAY;
            non_working = self.is_holiday_or_weekend(d);
        }
        d
    }

    /// The upcoming holidays: every cached holiday on or after `today`.
    ///
    /// When nothing strictly after `today` is cached yet, the year after the
    /// latest covered one is generated and the query retried, so the result
    /// always reaches into the future while coverage can still grow.
    pub fn next_holidays(&self, today: NaiveDate) -> Vec<NaiveDate> {
        self.ensure_year(today.year());
        loop {
            {
                let state = self.state.borrow();
                let has_upcoming = state
                    .holidays
                    .range((Bound::Excluded(today), Bound::Unbounded))
                    .next()
                    .is_some();
                if has_upcoming {
                    return state.holidays.range(today..).copied().collect();
                }
            }
            let last_covered = {
                let state = self.state.borrow();
                state
                    .generated_years
                    .iter()
                    .copied()
                    .max()
                    .unwrap_or(self.base_year)
            };
            if last_covered >= LAST_SUPPORTED_YEAR {
                // end of the supported range, return whatever is left
                let state = self.state.borrow();
                return state.holidays.range(today..).copied().collect();
            }
            self.ensure_year(last_covered + 1);
        }
    }
}

impl HolidayCalendar for ColombianCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        if (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&d.year()) {
            self.ensure_year(d.year());
        }
        self.state.borrow().holidays.contains(&d)
    }
}
