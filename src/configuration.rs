use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::CalendarError;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    holiday_rules: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    EasterRelated,
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType,
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    emiliani: bool,
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i64,
    #[serde(default)]
    emiliani: bool,
}

fn rule_from_json(json: serde_json::Value) -> Result<Rc<dyn RecurringHoliday>, CalendarError> {
    let typed_obj: HolidayTypedObject = serde_json::from_value(json.clone())?;
    match typed_obj.holiday_type {
        HolidayType::FixedDate => {
            let json_prop: FixedDateHolidayJsonProp = serde_json::from_value(json)?;
            Ok(Rc::new(FixedDateHoliday::new(
                json_prop.month,
                json_prop.day,
                json_prop.emiliani,
            )))
        }
        HolidayType::EasterRelated => {
            let json_prop: EasterRelatedHolidayJsonProp = serde_json::from_value(json)?;
            Ok(Rc::new(EasterRelatedHoliday::new(
                json_prop.shift_days,
                json_prop.emiliani,
            )))
        }
    }
}

/// Reads a holiday rule table from a JSON document of the form
///
/// ```json
/// {
///     "holiday_rules": [
///         { "holiday_type": "FixedDate", "month": 1, "day": 1 },
///         { "holiday_type": "FixedDate", "month": 1, "day": 6, "emiliani": true },
///         { "holiday_type": "EasterRelated", "shift_days": -2 }
///     ]
/// }
/// ```
pub fn rules_from_reader<R: Read>(reader: R) -> Result<Vec<Rc<dyn RecurringHoliday>>, CalendarError> {
    let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
    json_prop.holiday_rules.into_iter().map(rule_from_json).collect()
}

pub fn rules_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Rc<dyn RecurringHoliday>>, CalendarError> {
    let file = File::open(path)?;
    rules_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn loads_rules_from_json() {
        let json = r#"{
            "holiday_rules": [
                { "holiday_type": "FixedDate", "month": 7, "day": 20 },
                { "holiday_type": "FixedDate", "month": 1, "day": 6, "emiliani": true },
                { "holiday_type": "EasterRelated", "shift_days": -2 },
                { "holiday_type": "EasterRelated", "shift_days": 60, "emiliani": true }
            ]
        }"#;
        let rules = rules_from_reader(json.as_bytes()).unwrap();
        assert_eq!(rules.len(), 4);
        assert_eq!(
            rules[1].holiday(2024),
            Some(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
        );
        assert_eq!(
            rules[3].holiday(2024),
            Some(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
        );
    }

    #[test]
    fn unknown_rule_kind_is_rejected() {
        let json = r#"{ "holiday_rules": [ { "holiday_type": "LunarPhase" } ] }"#;
        assert!(matches!(
            rules_from_reader(json.as_bytes()),
            Err(CalendarError::Json(_))
        ));
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{ "holiday_rules": [ { "holiday_type": "FixedDate", "month": 5 } ] }"#;
        assert!(matches!(
            rules_from_reader(json.as_bytes()),
            Err(CalendarError::Json(_))
        ));
    }
}
