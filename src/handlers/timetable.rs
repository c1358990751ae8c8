//! Timetable tool handlers

use super::command_error;
use crate::RozkladServerHandler;
use crate::app::App;
use crate::timetable::{self, Timetable, TimetableCommand};
use crate::transfer;
use crate::validation;
use mcp_attr::Result as McpResult;
use std::path::Path;

impl RozkladServerHandler {
    fn render_timetable(&self, app: &mut App) -> McpResult<String> {
        match app.timetable_view(Some((self.clock)())) {
            Ok(view) => Ok(view.to_markdown()),
            Err(e) => command_error(e),
        }
    }

    fn apply_timetable(&self, command: TimetableCommand, message: &str) -> McpResult<String> {
        let mut app = self.app()?;
        if let Err(e) = app.timetable(command) {
            return command_error(e);
        }
        let table = self.render_timetable(&mut app)?;
        Ok(format!("{}\n\n{}", message, table))
    }

    pub async fn handle_timetable_show(&self, week: Option<String>) -> McpResult<String> {
        let week = validation::parse_optional_week(week.as_deref())?;
        let mut app = self.app()?;
        if let Some(week) = week
            && let Err(e) = app.timetable(TimetableCommand::SwitchWeek(week))
        {
            return command_error(e);
        }
        self.render_timetable(&mut app)
    }

    pub async fn handle_timetable_switch_week(&self, week: String) -> McpResult<String> {
        let week = validation::parse_week(&week)?;
        self.apply_timetable(
            TimetableCommand::SwitchWeek(week),
            &format!("Showing the {} week", week),
        )
    }

    pub async fn handle_timetable_set_subject(
        &self,
        day: String,
        slot: u32,
        subject: String,
    ) -> McpResult<String> {
        let day = validation::parse_school_day(&day)?;
        let slot = validation::parse_slot(slot)?;
        self.apply_timetable(
            TimetableCommand::SetSubject { day, slot, subject },
            &format!("Slot {} on {} updated", slot, day),
        )
    }

    pub async fn handle_timetable_add_slot(&self, day: String) -> McpResult<String> {
        let day = validation::parse_school_day(&day)?;
        self.apply_timetable(
            TimetableCommand::AddSlot(day),
            &format!("New slot added on {}", day),
        )
    }

    pub async fn handle_timetable_clear(&self, confirm: bool) -> McpResult<String> {
        if !confirm {
            return command_error(crate::error::AppError::ConfirmationRequired);
        }
        self.apply_timetable(TimetableCommand::Clear, "Timetable cleared")
    }

    pub async fn handle_timetable_export(&self, path: Option<String>) -> McpResult<String> {
        let contents = {
            let app = self.app()?;
            match app.export_timetable() {
                Ok(contents) => contents,
                Err(e) => return command_error(e),
            }
        };

        let target = transfer::resolve_export_path(
            path.as_deref().map(Path::new),
            timetable::EXPORT_FILE_NAME,
        );
        if let Err(e) = transfer::write_export(&target, &contents).await {
            return command_error(e.into());
        }
        Ok(format!("Timetable exported to {}", target.display()))
    }

    pub async fn handle_timetable_import(&self, path: String) -> McpResult<String> {
        let text = match transfer::read_import(Path::new(&path)).await {
            Ok(text) => text,
            Err(e) => return Err(validation::invalid_params(format!("{:#}", e))),
        };
        let data = match Timetable::parse_import(&text) {
            Ok(data) => data,
            Err(e) => return command_error(e),
        };
        self.apply_timetable(
            TimetableCommand::Import(data),
            &format!("Timetable imported from {}", path),
        )
    }
}
