//! Student diary: per-day lessons, homework, grades and a done flag
//!
//! Unlike the timetable, the diary keeps its data mirrored in memory. The
//! mirror is cleaned and written through to the store after every command.

pub mod model;
pub mod normalize;
pub mod render;

pub use model::{DAYS_PER_WEEK, Day, DiaryData, LESSONS_PER_DAY, Lesson, VALID_GRADES};
pub use render::DiaryView;

use crate::error::{AppError, AppResult};
use crate::store::{DIARY_KEY, LocalStore};
use crate::theme::Theme;
use crate::week::WeekType;
use crate::weekday::Weekday;
use anyhow::Context;
use chrono::NaiveDate;

/// File name offered for diary exports
pub const EXPORT_FILE_NAME: &str = "diary-data.json";

/// One user action on the diary
#[derive(Debug, Clone, PartialEq)]
pub enum DiaryCommand {
    SwitchWeek(WeekType),
    SetDate {
        day: Weekday,
        date: String,
    },
    /// `None` leaves a field as it is
    SetLesson {
        day: Weekday,
        lesson: usize,
        subject: Option<String>,
        homework: Option<String>,
        grade: Option<String>,
    },
    /// `None` flips the current value
    SetDone {
        day: Weekday,
        lesson: usize,
        done: Option<bool>,
    },
    Import(DiaryData),
}

pub struct Diary {
    week: WeekType,
    data: DiaryData,
}

impl Diary {
    /// Load the diary mirror from the store
    pub fn load(store: &LocalStore, week: WeekType) -> Self {
        let data = match store.get_item(DIARY_KEY) {
            Some(text) => match serde_json::from_str::<DiaryData>(text) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(error = %e, "stored diary is unreadable, starting empty");
                    DiaryData::new()
                }
            },
            None => DiaryData::new(),
        };
        Self { week, data }
    }

    pub fn week(&self) -> WeekType {
        self.week
    }

    pub fn data(&self) -> &DiaryData {
        &self.data
    }

    fn save(store: &mut LocalStore, data: &mut DiaryData) -> AppResult<()> {
        let cleaned = normalize::clean(data);
        if cleaned > 0 {
            tracing::debug!(cleaned, "reset blank lessons before save");
        }
        let text = serde_json::to_string(data).context("Failed to serialize diary")?;
        store.set_item(DIARY_KEY, text)?;
        Ok(())
    }

    /// Apply one command. The change is made on a copy, which replaces the
    /// mirror only once it has been validated and written to the store.
    pub fn dispatch(&mut self, store: &mut LocalStore, command: DiaryCommand) -> AppResult<()> {
        let mut next = self.data.clone();
        match command {
            DiaryCommand::SwitchWeek(week) => {
                self.week = week;
                return Ok(());
            }
            DiaryCommand::SetDate { day, date } => {
                let date = validate_date(&date)?;
                day_record(&mut next, self.week, day)?.date = date;
            }
            DiaryCommand::SetLesson {
                day,
                lesson,
                subject,
                homework,
                grade,
            } => {
                let index = lesson_index(lesson)?;
                let grade = grade.as_deref().map(validate_grade).transpose()?;

                let record = lesson_record(&mut next, self.week, day, index)?;
                if let Some(subject) = subject {
                    record.subject = subject;
                }
                if let Some(homework) = homework {
                    record.homework = homework;
                }
                if let Some(grade) = grade {
                    record.grade = grade;
                }
            }
            DiaryCommand::SetDone { day, lesson, done } => {
                let index = lesson_index(lesson)?;
                let record = lesson_record(&mut next, self.week, day, index)?;
                record.done = done.unwrap_or(!record.done);
            }
            DiaryCommand::Import(mut data) => {
                normalize::repair(&mut data);
                next = data;
                tracing::info!("diary imported");
            }
        }

        Self::save(store, &mut next)?;
        self.data = next;
        Ok(())
    }

    pub fn render(&self, theme: Theme, only: Option<Weekday>) -> DiaryView {
        DiaryView::build(&self.data, self.week, theme, only)
    }

    /// JSON document for export: the persisted blob, read back and reserialized
    pub fn export_json(store: &LocalStore) -> AppResult<String> {
        if store.get_item(DIARY_KEY).is_none() {
            return Err(AppError::NothingToExport);
        }
        let diary = Self::load(store, WeekType::default());
        Ok(serde_json::to_string(&diary.data).context("Failed to serialize diary")?)
    }

    /// Parse an import file. The top level must be a JSON object; everything
    /// below it is normalized.
    pub fn parse_import(text: &str) -> AppResult<DiaryData> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| AppError::Import(e.to_string()))?;
        if !value.is_object() {
            return Err(AppError::Import(
                "expected a JSON object with numerator and denominator weeks".to_string(),
            ));
        }
        Ok(normalize::diary_from_value(&value))
    }
}

fn day_record(data: &mut DiaryData, week: WeekType, day: Weekday) -> AppResult<&mut Day> {
    data.day_mut(week, day).ok_or_else(|| AppError::MissingDay {
        day: day.label().to_string(),
    })
}

fn lesson_record(
    data: &mut DiaryData,
    week: WeekType,
    day: Weekday,
    index: usize,
) -> AppResult<&mut Lesson> {
    day_record(data, week, day)?
        .lessons
        .get_mut(index)
        .ok_or(AppError::UnknownLesson {
            lesson: index + 1,
            max: LESSONS_PER_DAY,
        })
}

fn lesson_index(lesson: usize) -> AppResult<usize> {
    if (1..=LESSONS_PER_DAY).contains(&lesson) {
        Ok(lesson - 1)
    } else {
        Err(AppError::UnknownLesson {
            lesson,
            max: LESSONS_PER_DAY,
        })
    }
}

fn validate_grade(grade: &str) -> AppResult<String> {
    let grade = grade.trim();
    if grade.is_empty() || VALID_GRADES.contains(&grade) {
        Ok(grade.to_string())
    } else {
        Err(AppError::InvalidGrade(grade.to_string()))
    }
}

fn validate_date(date: &str) -> AppResult<String> {
    let date = date.trim();
    if date.is_empty() {
        return Ok(String::new());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| AppError::InvalidDate(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn open_store() -> (LocalStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let store = LocalStore::open(temp_file.path()).unwrap();
        (store, temp_file)
    }

    #[test]
    fn test_validate_grade() {
        assert_eq!(validate_grade(" 4 ").unwrap(), "4");
        assert_eq!(validate_grade("").unwrap(), "");
        assert!(matches!(validate_grade("1"), Err(AppError::InvalidGrade(_))));
        assert!(matches!(validate_grade("12"), Err(AppError::InvalidGrade(_))));
        assert!(matches!(validate_grade("A"), Err(AppError::InvalidGrade(_))));
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("2025-09-01").unwrap(), "2025-09-01");
        assert_eq!(validate_date("").unwrap(), "");
        assert!(matches!(validate_date("01.09.2025"), Err(AppError::InvalidDate(_))));
        assert!(matches!(validate_date("2025-02-30"), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn test_lesson_index_bounds() {
        assert_eq!(lesson_index(1).unwrap(), 0);
        assert_eq!(lesson_index(8).unwrap(), 7);
        assert!(lesson_index(0).is_err());
        assert!(lesson_index(9).is_err());
    }

    #[test]
    fn test_toggle_done_without_value() {
        let (mut store, _temp_file) = open_store();
        let mut diary = Diary::load(&store, WeekType::Numerator);
        let toggle = DiaryCommand::SetDone {
            day: Weekday::Monday,
            lesson: 2,
            done: None,
        };

        diary.dispatch(&mut store, toggle.clone()).unwrap();
        assert!(diary.data().numerator[0].lessons[1].done);
        diary.dispatch(&mut store, toggle).unwrap();
        assert!(!diary.data().numerator[0].lessons[1].done);
    }

    #[test]
    fn test_rejected_grade_changes_nothing() {
        let (mut store, _temp_file) = open_store();
        let mut diary = Diary::load(&store, WeekType::Numerator);

        let result = diary.dispatch(
            &mut store,
            DiaryCommand::SetLesson {
                day: Weekday::Friday,
                lesson: 1,
                subject: Some("Біологія".to_string()),
                homework: None,
                grade: Some("6".to_string()),
            },
        );
        assert!(result.is_err());
        assert_eq!(diary.data(), &DiaryData::new());
        assert!(store.get_item(DIARY_KEY).is_none());
    }

    #[test]
    fn test_switch_week_does_not_write() {
        let (mut store, _temp_file) = open_store();
        let mut diary = Diary::load(&store, WeekType::Numerator);
        diary
            .dispatch(&mut store, DiaryCommand::SwitchWeek(WeekType::Denominator))
            .unwrap();
        assert_eq!(diary.week(), WeekType::Denominator);
        assert!(store.get_item(DIARY_KEY).is_none());
    }

    #[test]
    fn test_import_of_short_data_is_repaired() {
        let (mut store, _temp_file) = open_store();
        let mut diary = Diary::load(&store, WeekType::Numerator);

        diary
            .dispatch(
                &mut store,
                DiaryCommand::Import(DiaryData {
                    numerator: Vec::new(),
                    denominator: Vec::new(),
                }),
            )
            .unwrap();
        assert_eq!(diary.data(), &DiaryData::new());

        diary
            .dispatch(
                &mut store,
                DiaryCommand::SetDate {
                    day: Weekday::Monday,
                    date: "2025-09-01".to_string(),
                },
            )
            .unwrap();
        diary
            .dispatch(
                &mut store,
                DiaryCommand::SetDone {
                    day: Weekday::Sunday,
                    lesson: 8,
                    done: Some(true),
                },
            )
            .unwrap();
        assert_eq!(diary.data().numerator[0].date, "2025-09-01");
        assert!(diary.data().numerator[6].lessons[7].done);
    }

    #[test]
    fn test_failed_write_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        let mut store = LocalStore::open(&path).unwrap();
        let mut diary = Diary::load(&store, WeekType::Numerator);
        diary
            .dispatch(
                &mut store,
                DiaryCommand::SetDate {
                    day: Weekday::Monday,
                    date: "2025-09-01".to_string(),
                },
            )
            .unwrap();
        let saved = store.get_item(DIARY_KEY).map(str::to_string);

        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let result = diary.dispatch(
            &mut store,
            DiaryCommand::SetDate {
                day: Weekday::Tuesday,
                date: "2025-09-02".to_string(),
            },
        );
        assert!(matches!(result, Err(AppError::Storage(_))));
        assert_eq!(diary.data().numerator[1].date, "");
        assert_eq!(store.get_item(DIARY_KEY).map(str::to_string), saved);

        let result = diary.dispatch(&mut store, DiaryCommand::Import(DiaryData::new()));
        assert!(result.is_err());
        assert_eq!(diary.data().numerator[0].date, "2025-09-01");
    }

    #[test]
    fn test_parse_import_requires_object() {
        assert!(matches!(Diary::parse_import("[1]"), Err(AppError::Import(_))));
        assert!(matches!(Diary::parse_import("{oops"), Err(AppError::Import(_))));
        let data = Diary::parse_import("{}").unwrap();
        assert_eq!(data, DiaryData::new());
    }
}
