//! Repair and cleanup of diary data
//!
//! Normalization never fails: whatever JSON it is given, the result has two
//! weeks of seven days with eight lessons each. Fields are coerced one by one,
//! so a single bad field does not cost the rest of the record.

use super::model::{DAYS_PER_WEEK, Day, DiaryData, LESSONS_PER_DAY, Lesson};
use crate::week::WeekType;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Build diary data from an arbitrary JSON value
pub fn diary_from_value(value: &Value) -> DiaryData {
    DiaryData {
        numerator: week_from_value(value.get(WeekType::Numerator.as_str())),
        denominator: week_from_value(value.get(WeekType::Denominator.as_str())),
    }
}

fn week_from_value(value: Option<&Value>) -> Vec<Day> {
    let mut days: Vec<Day> = value
        .and_then(Value::as_array)
        .map(|items| items.iter().take(DAYS_PER_WEEK).map(day_from_value).collect())
        .unwrap_or_default();
    days.resize_with(DAYS_PER_WEEK, Day::default);
    days
}

fn day_from_value(value: &Value) -> Day {
    let date = match value.get("date") {
        Some(Value::String(date)) => date.clone(),
        _ => String::new(),
    };

    let mut lessons: Vec<Lesson> = value
        .get("lessons")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .take(LESSONS_PER_DAY)
                .map(lesson_from_value)
                .collect()
        })
        .unwrap_or_default();
    lessons.resize_with(LESSONS_PER_DAY, Lesson::default);

    Day { date, lessons }
}

fn lesson_from_value(value: &Value) -> Lesson {
    Lesson {
        subject: text_field(value.get("subject")),
        homework: text_field(value.get("homework")),
        grade: text_field(value.get("grade")),
        done: matches!(value.get("done"), Some(Value::Bool(true))),
    }
}

/// Strings pass through, numbers keep their decimal text, anything else is empty
fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl<'de> Deserialize<'de> for DiaryData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(diary_from_value(&value))
    }
}

/// Pad or truncate already typed data to seven days of eight lessons per week
pub fn repair(data: &mut DiaryData) {
    for week in [&mut data.numerator, &mut data.denominator] {
        week.resize_with(DAYS_PER_WEEK, Day::default);
        for day in week.iter_mut() {
            day.lessons.resize_with(LESSONS_PER_DAY, Lesson::default);
        }
    }
}

/// Reset blank lessons to the canonical empty lesson.
///
/// Returns how many lessons were rewritten.
pub fn clean(data: &mut DiaryData) -> usize {
    let mut cleaned = 0;
    for day in data.numerator.iter_mut().chain(data.denominator.iter_mut()) {
        for lesson in &mut day.lessons {
            if lesson.is_blank() && *lesson != Lesson::default() {
                *lesson = Lesson::default();
                cleaned += 1;
            }
        }
    }
    cleaned
}
