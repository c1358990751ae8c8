//! Diary tool handlers

use super::command_error;
use crate::RozkladServerHandler;
use crate::diary::{self, Diary, DiaryCommand};
use crate::transfer;
use crate::validation;
use crate::weekday::Weekday;
use mcp_attr::Result as McpResult;
use std::path::Path;

impl RozkladServerHandler {
    /// Apply `command`, then render the affected day (or the whole week)
    fn apply_diary(
        &self,
        command: DiaryCommand,
        only: Option<Weekday>,
        message: &str,
    ) -> McpResult<String> {
        let mut app = self.app()?;
        if let Err(e) = app.diary_command(command) {
            return command_error(e);
        }
        Ok(format!("{}\n\n{}", message, app.diary_view(only).to_markdown()))
    }

    pub async fn handle_diary_show(
        &self,
        week: Option<String>,
        day: Option<String>,
    ) -> McpResult<String> {
        let week = validation::parse_optional_week(week.as_deref())?;
        let only = validation::parse_optional_day(day.as_deref())?;
        let mut app = self.app()?;
        if let Some(week) = week
            && let Err(e) = app.diary_command(DiaryCommand::SwitchWeek(week))
        {
            return command_error(e);
        }
        Ok(app.diary_view(only).to_markdown())
    }

    pub async fn handle_diary_switch_week(&self, week: String) -> McpResult<String> {
        let week = validation::parse_week(&week)?;
        self.apply_diary(
            DiaryCommand::SwitchWeek(week),
            None,
            &format!("Showing the {} week", week),
        )
    }

    pub async fn handle_diary_set_date(&self, day: String, date: String) -> McpResult<String> {
        let day = validation::parse_day(&day)?;
        self.apply_diary(
            DiaryCommand::SetDate { day, date },
            Some(day),
            &format!("Date of {} updated", day),
        )
    }

    pub async fn handle_diary_set_lesson(
        &self,
        day: String,
        lesson: u32,
        subject: Option<String>,
        homework: Option<String>,
        grade: Option<String>,
    ) -> McpResult<String> {
        let day = validation::parse_day(&day)?;
        let lesson = lesson as usize;
        self.apply_diary(
            DiaryCommand::SetLesson {
                day,
                lesson,
                subject,
                homework,
                grade,
            },
            Some(day),
            &format!("Lesson {} on {} updated", lesson, day),
        )
    }

    pub async fn handle_diary_set_done(
        &self,
        day: String,
        lesson: u32,
        done: Option<bool>,
    ) -> McpResult<String> {
        let day = validation::parse_day(&day)?;
        let lesson = lesson as usize;
        self.apply_diary(
            DiaryCommand::SetDone { day, lesson, done },
            Some(day),
            &format!("Lesson {} on {} updated", lesson, day),
        )
    }

    pub async fn handle_diary_export(&self, path: Option<String>) -> McpResult<String> {
        let contents = {
            let app = self.app()?;
            match app.export_diary() {
                Ok(contents) => contents,
                Err(e) => return command_error(e),
            }
        };

        let target =
            transfer::resolve_export_path(path.as_deref().map(Path::new), diary::EXPORT_FILE_NAME);
        if let Err(e) = transfer::write_export(&target, &contents).await {
            return command_error(e.into());
        }
        Ok(format!("Diary exported to {}", target.display()))
    }

    pub async fn handle_diary_import(&self, path: String) -> McpResult<String> {
        let text = match transfer::read_import(Path::new(&path)).await {
            Ok(text) => text,
            Err(e) => return Err(validation::invalid_params(format!("{:#}", e))),
        };
        let data = match Diary::parse_import(&text) {
            Ok(data) => data,
            Err(e) => return command_error(e),
        };
        self.apply_diary(
            DiaryCommand::Import(data),
            None,
            &format!("Diary imported from {}", path),
        )
    }
}
