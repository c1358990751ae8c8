//! Parameter parsing for MCP tools
//!
//! Turns raw tool arguments into domain values, reporting bad input as
//! `INVALID_PARAMS` errors.

use crate::timetable::MAX_SLOTS;
use crate::week::WeekType;
use crate::weekday::Weekday;
use mcp_attr::Result as McpResult;

/// Build an `INVALID_PARAMS` error carrying a user-facing message
pub fn invalid_params(message: impl Into<String>) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message.into(), true)
}

pub fn parse_week(week_str: &str) -> McpResult<WeekType> {
    week_str.parse::<WeekType>().map_err(invalid_params)
}

/// Optional week argument; an empty string counts as absent
pub fn parse_optional_week(week: Option<&str>) -> McpResult<Option<WeekType>> {
    match week.map(str::trim) {
        None | Some("") => Ok(None),
        Some(week_str) => parse_week(week_str).map(Some),
    }
}

pub fn parse_day(day_str: &str) -> McpResult<Weekday> {
    day_str.parse::<Weekday>().map_err(invalid_params)
}

/// Timetable days are Monday to Friday only
pub fn parse_school_day(day_str: &str) -> McpResult<Weekday> {
    let day = parse_day(day_str)?;
    if day.is_school_day() {
        Ok(day)
    } else {
        Err(invalid_params(format!(
            "{} has no classes. The timetable covers Monday to Friday",
            day.label()
        )))
    }
}

/// Optional day argument; an empty string counts as absent
pub fn parse_optional_day(day: Option<&str>) -> McpResult<Option<Weekday>> {
    match day.map(str::trim) {
        None | Some("") => Ok(None),
        Some(day_str) => parse_day(day_str).map(Some),
    }
}

pub fn parse_slot(slot: u32) -> McpResult<u8> {
    u8::try_from(slot)
        .ok()
        .filter(|slot| (1..=MAX_SLOTS).contains(slot))
        .ok_or_else(|| {
            invalid_params(format!(
                "Slot must be between 1 and {}, got {}",
                MAX_SLOTS, slot
            ))
        })
}
