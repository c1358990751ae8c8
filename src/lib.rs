//! Rozklad MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for two small
//! personal scheduling tools: a weekly class timetable with alternating
//! numerator/denominator weeks, and a student diary tracking lessons,
//! homework, grades and completion per day.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `RozkladServerHandler` - one tool per user action
//! - **Domain Layer**: `timetable` and `diary` modules - data shape,
//!   normalization, commands and views
//! - **Persistence Layer**: `store` module - a TOML file of named JSON blobs
//!
//! Every tool call is a single command followed by a full re-render of the
//! affected view, returned as Markdown.
//!
//! # Example
//!
//! ```no_run
//! use rozklad_mcp::{RozkladServerHandler, WeekType};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = RozkladServerHandler::new("rozklad.toml", WeekType::Numerator)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod diary;
pub mod error;
pub mod formatting;
mod handlers;
pub mod store;
pub mod theme;
pub mod timetable;
pub mod transfer;
pub mod validation;
pub mod week;
pub mod weekday;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use app::App;
pub use diary::{Day, DiaryCommand, DiaryData, Lesson};
pub use error::AppError;
pub use store::LocalStore;
pub use theme::Theme;
pub use timetable::{Schedule, SlotKey, TimetableCommand, TimetableData};
pub use week::WeekType;
pub use weekday::Weekday;

/// Source of the wall-clock time used for current-slot highlighting
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// MCP Server handler for the timetable and the diary
///
/// Owns the whole application state. All changes are written to the store
/// file as soon as they are made; there is no separate save step.
pub struct RozkladServerHandler {
    pub(crate) app: Mutex<App>,
    pub(crate) clock: Clock,
}

impl RozkladServerHandler {
    /// Create a new handler
    ///
    /// # Arguments
    /// * `store_path` - Path to the store file (TOML format)
    /// * `week` - Week initially selected in both tools
    ///
    /// # Example
    /// ```no_run
    /// # use rozklad_mcp::{RozkladServerHandler, WeekType};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = RozkladServerHandler::new("rozklad.toml", WeekType::Numerator)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(store_path: &str, week: WeekType) -> Result<Self> {
        Self::with_clock(store_path, week, local_now)
    }

    /// Create a handler that reads the time from `clock`
    pub fn with_clock(store_path: &str, week: WeekType, clock: Clock) -> Result<Self> {
        let app = Mutex::new(App::open(store_path, week)?);
        Ok(Self { app, clock })
    }
}

/// Personal class timetable and student diary.
///
/// **Timetable**: a grid of 5 school days (Понеділок..П’ятниця) by numbered slots
/// (pairs). Every day starts with 8 slots with fixed times from 8:00 to 20:40 and can
/// grow to 12. Two alternating weeks exist: "numerator" and "denominator".
/// The slot in progress right now is marked with ▶.
///
/// **Diary**: for each of 7 days of both weeks, a date and 8 lessons, each with a subject,
/// homework, a grade (2-5) and a done flag (Так/Ні).
///
/// Days can be given as monday..sunday, mon..sun, 1-7 or the Ukrainian day name.
#[mcp_server]
impl McpServer for RozkladServerHandler {
    /// **Timetable view**: Show the timetable of the selected week with the current slot marked.
    /// Pass a week to switch to it first.
    #[tool]
    async fn timetable_show(
        &self,
        /// Week: numerator/denominator (optional)
        week: Option<String>,
    ) -> McpResult<String> {
        self.handle_timetable_show(week).await
    }

    /// **Timetable week**: Select the numerator or denominator week and show it.
    #[tool]
    async fn timetable_switch_week(
        &self,
        /// Week: numerator/denominator
        week: String,
    ) -> McpResult<String> {
        self.handle_timetable_switch_week(week).await
    }

    /// **Timetable edit**: Set the subject of an existing slot in the selected week.
    /// **Tip**: Use "" or "—" to mark the slot free.
    #[tool]
    async fn timetable_set_subject(
        &self,
        /// Day: monday..friday
        day: String,
        /// Slot number, 1-12
        slot: u32,
        /// Subject name, ""=free slot
        subject: String,
    ) -> McpResult<String> {
        self.handle_timetable_set_subject(day, slot, subject).await
    }

    /// **Timetable add slot**: Append a new free slot to a day of the selected week.
    /// Rejected while the day still has a free slot, or when it already has 12.
    #[tool]
    async fn timetable_add_slot(
        &self,
        /// Day: monday..friday
        day: String,
    ) -> McpResult<String> {
        self.handle_timetable_add_slot(day).await
    }

    /// **Timetable clear**: Delete both weeks of the timetable. Cannot be undone.
    #[tool]
    async fn timetable_clear(
        &self,
        /// Must be true to confirm
        confirm: bool,
    ) -> McpResult<String> {
        self.handle_timetable_clear(confirm).await
    }

    /// **Timetable export**: Write the timetable as JSON (default file: rozklad-data.json).
    #[tool]
    async fn timetable_export(
        &self,
        /// Target file or directory (optional)
        path: Option<String>,
    ) -> McpResult<String> {
        self.handle_timetable_export(path).await
    }

    /// **Timetable import**: Replace the whole timetable with a JSON file.
    /// On error nothing is changed.
    #[tool]
    async fn timetable_import(
        &self,
        /// JSON file to import
        path: String,
    ) -> McpResult<String> {
        self.handle_timetable_import(path).await
    }

    /// **Diary view**: Show the diary of the selected week, or a single day of it.
    #[tool]
    async fn diary_show(
        &self,
        /// Week: numerator/denominator (optional, switches the selected week)
        week: Option<String>,
        /// Day to show (optional, default: whole week)
        day: Option<String>,
    ) -> McpResult<String> {
        self.handle_diary_show(week, day).await
    }

    /// **Diary week**: Select the numerator or denominator week and show it.
    #[tool]
    async fn diary_switch_week(
        &self,
        /// Week: numerator/denominator
        week: String,
    ) -> McpResult<String> {
        self.handle_diary_switch_week(week).await
    }

    /// **Diary date**: Set the date of a day in the selected week.
    #[tool]
    async fn diary_set_date(
        &self,
        /// Day: monday..sunday
        day: String,
        /// Date YYYY-MM-DD, ""=clear
        date: String,
    ) -> McpResult<String> {
        self.handle_diary_set_date(day, date).await
    }

    /// **Diary lesson**: Update a lesson of a day in the selected week.
    /// **Tip**: Omitted fields are kept, "" clears a field.
    #[tool]
    async fn diary_set_lesson(
        &self,
        /// Day: monday..sunday
        day: String,
        /// Lesson number, 1-8
        lesson: u32,
        /// Subject (optional)
        subject: Option<String>,
        /// Homework (optional)
        homework: Option<String>,
        /// Grade 2-5, ""=clear (optional)
        grade: Option<String>,
    ) -> McpResult<String> {
        self.handle_diary_set_lesson(day, lesson, subject, homework, grade)
            .await
    }

    /// **Diary done**: Mark a lesson done or not done. Omit `done` to toggle.
    #[tool]
    async fn diary_set_done(
        &self,
        /// Day: monday..sunday
        day: String,
        /// Lesson number, 1-8
        lesson: u32,
        /// true=done, false=not done (optional, default: toggle)
        done: Option<bool>,
    ) -> McpResult<String> {
        self.handle_diary_set_done(day, lesson, done).await
    }

    /// **Diary export**: Write the diary as JSON (default file: diary-data.json).
    #[tool]
    async fn diary_export(
        &self,
        /// Target file or directory (optional)
        path: Option<String>,
    ) -> McpResult<String> {
        self.handle_diary_export(path).await
    }

    /// **Diary import**: Replace the whole diary with a JSON file.
    /// On error nothing is changed.
    #[tool]
    async fn diary_import(
        &self,
        /// JSON file to import
        path: String,
    ) -> McpResult<String> {
        self.handle_diary_import(path).await
    }

    /// **Theme**: Switch between the light and dark theme. The choice is remembered.
    #[tool]
    async fn toggle_theme(&self) -> McpResult<String> {
        self.handle_toggle_theme().await
    }
}
