//! Errors raised by timetable and diary commands
//!
//! Every variant except `Storage` is a rejected user action: the message is
//! shown to the user as-is and no state has been changed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("A free slot already exists on {day}. Fill it in before adding a new one.")]
    FreeSlotExists { day: String },

    #[error("The maximum number of slots ({max}) on {day} has been reached.")]
    SlotLimitReached { day: String, max: u8 },

    #[error("Slot {slot} does not exist on {day}. Add it first.")]
    UnknownSlot { day: String, slot: u8 },

    #[error("The diary has no record for {day}")]
    MissingDay { day: String },

    #[error("Lesson number must be between 1 and {max}, got {lesson}")]
    UnknownLesson { lesson: usize, max: usize },

    #[error("Invalid grade '{0}'. Use 2, 3, 4, 5 or an empty value")]
    InvalidGrade(String),

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD (e.g., '2025-09-01')")]
    InvalidDate(String),

    #[error("Clearing the whole timetable cannot be undone. Pass confirm=true to proceed.")]
    ConfirmationRequired,

    #[error("No data to export")]
    NothingToExport,

    #[error("Import failed: {0}")]
    Import(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
