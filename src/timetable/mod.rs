//! Weekly class timetable
//!
//! The timetable keeps no in-memory copy of its data: every command and
//! every render pulls the current blob from the store, works on it and writes
//! it straight back.
//! - `schedule`: slot keys, weeks and the add-slot rule
//! - `normalize`: repair of loaded and imported documents
//! - `serde_impl`: JSON form of the data
//! - `highlight`: current-slot detection from the clock
//! - `render`: the view model and its Markdown form

pub mod highlight;
pub mod normalize;
pub mod render;
pub mod schedule;
mod serde_impl;

pub use render::TimetableView;
pub use schedule::{DEFAULT_SLOTS, MAX_SLOTS, Schedule, SlotKey, TimetableData};

use crate::error::{AppError, AppResult};
use crate::store::{LocalStore, SCHEDULE_KEY};
use crate::theme::Theme;
use crate::week::WeekType;
use crate::weekday::Weekday;
use anyhow::Context;
use chrono::NaiveDateTime;

/// File name offered for timetable exports
pub const EXPORT_FILE_NAME: &str = "rozklad-data.json";

/// One user action on the timetable
#[derive(Debug, Clone, PartialEq)]
pub enum TimetableCommand {
    SwitchWeek(WeekType),
    SetSubject {
        day: Weekday,
        slot: u8,
        subject: String,
    },
    AddSlot(Weekday),
    Clear,
    Import(TimetableData),
}

/// Controller for the timetable; only the selected week lives here
#[derive(Debug, Clone)]
pub struct Timetable {
    week: WeekType,
}

impl Timetable {
    pub fn new(week: WeekType) -> Self {
        Self { week }
    }

    /// Read the persisted timetable, falling back to empty weeks when there is
    /// none or it cannot be read
    pub fn load(store: &LocalStore) -> TimetableData {
        let Some(text) = store.get_item(SCHEDULE_KEY) else {
            return TimetableData::new();
        };
        match serde_json::from_str(text) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "stored timetable is unreadable, starting empty");
                TimetableData::new()
            }
        }
    }

    fn save(store: &mut LocalStore, data: &TimetableData) -> AppResult<()> {
        let text = serde_json::to_string(data).context("Failed to serialize timetable")?;
        store.set_item(SCHEDULE_KEY, text)?;
        Ok(())
    }

    /// Apply one command. A rejected command leaves the store untouched.
    pub fn dispatch(&mut self, store: &mut LocalStore, command: TimetableCommand) -> AppResult<()> {
        match command {
            TimetableCommand::SwitchWeek(week) => {
                self.week = week;
            }
            TimetableCommand::SetSubject { day, slot, subject } => {
                let mut data = Self::load(store);
                normalize::ensure_week_materialized(&mut data, self.week);
                data.week_mut(self.week).set_subject(day, slot, &subject)?;
                Self::save(store, &data)?;
            }
            TimetableCommand::AddSlot(day) => {
                let mut data = Self::load(store);
                normalize::ensure_week_materialized(&mut data, self.week);
                match data.week_mut(self.week).add_slot(day) {
                    Ok(slot) => {
                        tracing::info!(week = %self.week, day = %day, slot, "slot added");
                    }
                    Err(e) => {
                        tracing::info!(week = %self.week, day = %day, reason = %e, "slot add rejected");
                        return Err(e);
                    }
                }
                Self::save(store, &data)?;
            }
            TimetableCommand::Clear => {
                store.remove_item(SCHEDULE_KEY)?;
                tracing::info!("timetable cleared");
            }
            TimetableCommand::Import(data) => {
                Self::save(store, &data)?;
                tracing::info!(
                    numerator = data.numerator.len(),
                    denominator = data.denominator.len(),
                    "timetable imported"
                );
            }
        }
        Ok(())
    }

    /// Build the view of the selected week, materializing it first if it has
    /// never been touched. `now` drives the current-slot markers.
    pub fn render(
        &self,
        store: &mut LocalStore,
        theme: Theme,
        now: Option<NaiveDateTime>,
    ) -> AppResult<TimetableView> {
        let mut data = Self::load(store);
        if normalize::ensure_week_materialized(&mut data, self.week) {
            Self::save(store, &data)?;
        }

        let mut view = TimetableView::build(data.week(self.week), self.week, theme);
        if let Some(now) = now {
            highlight::apply(&mut view, now);
        }
        Ok(view)
    }

    /// JSON document for export: the persisted blob, read back and reserialized
    pub fn export_json(store: &LocalStore) -> AppResult<String> {
        if store.get_item(SCHEDULE_KEY).is_none() {
            return Err(AppError::NothingToExport);
        }
        let data = Self::load(store);
        Ok(serde_json::to_string(&data).context("Failed to serialize timetable")?)
    }

    /// Parse an import file. Nothing is changed until the result is dispatched.
    pub fn parse_import(text: &str) -> AppResult<TimetableData> {
        serde_json::from_str(text).map_err(|e| AppError::Import(e.to_string()))
    }
}
