use super::model::{Day, DiaryData};
use crate::formatting::{format_theme_line, markdown_table};
use crate::theme::Theme;
use crate::week::WeekType;
use crate::weekday::Weekday;

/// Label of a lesson marked done
pub const DONE_LABEL: &str = "Так";
/// Label of a lesson not yet done
pub const NOT_DONE_LABEL: &str = "Ні";

pub fn done_label(done: bool) -> &'static str {
    if done { DONE_LABEL } else { NOT_DONE_LABEL }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRow {
    /// 1-based lesson number
    pub number: usize,
    pub subject: String,
    pub homework: String,
    pub grade: String,
    pub done: bool,
}

impl LessonRow {
    pub fn done_label(&self) -> &'static str {
        done_label(self.done)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub day: Weekday,
    pub date: String,
    pub lessons: Vec<LessonRow>,
}

impl DayView {
    fn build(day: Weekday, record: &Day) -> Self {
        Self {
            day,
            date: record.date.clone(),
            lessons: record
                .lessons
                .iter()
                .enumerate()
                .map(|(i, lesson)| LessonRow {
                    number: i + 1,
                    subject: lesson.subject.clone(),
                    homework: lesson.homework.clone(),
                    grade: lesson.grade.clone(),
                    done: lesson.done,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryView {
    pub week: WeekType,
    pub theme: Theme,
    pub days: Vec<DayView>,
}

impl DiaryView {
    /// View of one week, or of a single day of it when `only` is given
    pub fn build(data: &DiaryData, week: WeekType, theme: Theme, only: Option<Weekday>) -> Self {
        let days = Weekday::ALL
            .into_iter()
            .filter(|day| only.is_none_or(|only| only == *day))
            .filter_map(|day| data.day(week, day).map(|record| DayView::build(day, record)))
            .collect();

        Self { week, theme, days }
    }

    pub fn to_markdown(&self) -> String {
        let mut result = format!(
            "## Щоденник: {} ({})\n",
            self.week.label(),
            self.week.as_str()
        );
        result.push_str(&format_theme_line(self.theme));

        let headers: Vec<String> = ["#", "Предмет", "Домашнє завдання", "Оцінка", "Виконано"]
            .into_iter()
            .map(String::from)
            .collect();

        for day in &self.days {
            if day.date.is_empty() {
                result.push_str(&format!("\n### {}\n\n", day.day.label()));
            } else {
                result.push_str(&format!("\n### {} ({})\n\n", day.day.label(), day.date));
            }

            let rows: Vec<Vec<String>> = day
                .lessons
                .iter()
                .map(|lesson| {
                    vec![
                        lesson.number.to_string(),
                        lesson.subject.clone(),
                        lesson.homework.clone(),
                        lesson.grade.clone(),
                        lesson.done_label().to_string(),
                    ]
                })
                .collect();
            result.push_str(&markdown_table(&headers, &rows));
        }

        result
    }
}
