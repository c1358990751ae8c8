//! Application state shared by both tools
//!
//! `App` owns the store and both controllers. Each method applies one command
//! and leaves re-rendering to the caller.

use crate::diary::{Diary, DiaryCommand, DiaryView};
use crate::error::AppResult;
use crate::store::LocalStore;
use crate::theme::Theme;
use crate::timetable::{Timetable, TimetableCommand, TimetableView};
use crate::week::WeekType;
use crate::weekday::Weekday;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::Path;

pub struct App {
    store: LocalStore,
    timetable: Timetable,
    diary: Diary,
    theme: Theme,
}

impl App {
    /// Open the store and restore the saved theme
    pub fn open(store_path: impl AsRef<Path>, week: WeekType) -> Result<Self> {
        let store = LocalStore::open(store_path)?;
        let theme = Theme::load(&store);
        let diary = Diary::load(&store, week);
        tracing::info!(
            path = %store.file_path().display(),
            %theme,
            %week,
            "application state loaded"
        );
        Ok(Self {
            store,
            timetable: Timetable::new(week),
            diary,
            theme,
        })
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn diary_week(&self) -> WeekType {
        self.diary.week()
    }

    pub fn timetable(&mut self, command: TimetableCommand) -> AppResult<()> {
        self.timetable.dispatch(&mut self.store, command)
    }

    pub fn timetable_view(&mut self, now: Option<NaiveDateTime>) -> AppResult<TimetableView> {
        self.timetable.render(&mut self.store, self.theme, now)
    }

    pub fn export_timetable(&self) -> AppResult<String> {
        Timetable::export_json(&self.store)
    }

    pub fn diary_command(&mut self, command: DiaryCommand) -> AppResult<()> {
        self.diary.dispatch(&mut self.store, command)
    }

    pub fn diary_view(&self, only: Option<Weekday>) -> DiaryView {
        self.diary.render(self.theme, only)
    }

    pub fn export_diary(&self) -> AppResult<String> {
        Diary::export_json(&self.store)
    }

    /// Flip and persist the theme
    pub fn toggle_theme(&mut self) -> AppResult<Theme> {
        let theme = self.theme.toggled();
        theme.save(&mut self.store)?;
        self.theme = theme;
        tracing::info!(%theme, "theme changed");
        Ok(theme)
    }
}
