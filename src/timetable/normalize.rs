//! Repair of loaded or imported timetable data
//!
//! Persisted and imported documents carry no version field, so any JSON is
//! accepted as long as its top level (and each week present) is an object.
//! Individual entries that cannot be understood are dropped.

use super::schedule::{Schedule, SlotKey, TimetableData};
use crate::week::WeekType;
use serde_json::Value;

/// Build timetable data from an arbitrary JSON value
///
/// # Errors
///
/// Returns a description of the problem when the top level, or one of the
/// `numerator`/`denominator` members, is not a JSON object.
pub fn timetable_from_value(value: &Value) -> Result<TimetableData, String> {
    let Value::Object(root) = value else {
        return Err("expected a JSON object with numerator and denominator weeks".to_string());
    };

    Ok(TimetableData {
        numerator: schedule_from_value(root.get(WeekType::Numerator.as_str()), WeekType::Numerator)?,
        denominator: schedule_from_value(
            root.get(WeekType::Denominator.as_str()),
            WeekType::Denominator,
        )?,
    })
}

fn schedule_from_value(value: Option<&Value>, week: WeekType) -> Result<Schedule, String> {
    let entries = match value {
        None | Some(Value::Null) => return Ok(Schedule::new()),
        Some(Value::Object(entries)) => entries,
        Some(_) => return Err(format!("week '{}' must be a JSON object", week)),
    };

    let mut schedule = Schedule::new();
    for (key, subject) in entries {
        let Ok(slot_key) = key.parse::<SlotKey>() else {
            tracing::debug!(%key, %week, "dropping unrecognized slot key");
            continue;
        };
        match coerce_subject(subject) {
            Some(subject) => schedule.insert(slot_key, subject),
            None => tracing::debug!(%key, %week, "dropping non-text subject"),
        }
    }
    Ok(schedule)
}

fn coerce_subject(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => Some(String::new()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Give an untouched week its full blank grid. Returns true when it changed.
pub fn ensure_week_materialized(data: &mut TimetableData, week: WeekType) -> bool {
    let schedule = data.week_mut(week);
    if schedule.is_empty() {
        schedule.materialize();
        true
    } else {
        false
    }
}
