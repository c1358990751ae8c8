//! Current-slot highlighting
//!
//! Maps wall-clock time onto the fixed slot table. Weekends, the gaps between
//! slots and anything outside 08:00-20:40 map to no slot.

use super::render::TimetableView;
use crate::weekday::Weekday;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Closed `[start, end]` minute-of-day interval of each default slot
pub const SLOT_MINUTES: [(u32, u32); 8] = [
    (8 * 60, 9 * 60 + 20),
    (9 * 60 + 35, 10 * 60 + 55),
    (11 * 60 + 10, 12 * 60 + 30),
    (13 * 60, 14 * 60 + 20),
    (14 * 60 + 35, 15 * 60 + 55),
    (16 * 60 + 10, 17 * 60 + 30),
    (17 * 60 + 45, 19 * 60 + 5),
    (19 * 60 + 20, 20 * 60 + 40),
];

/// 1-based slot whose interval contains `minute_of_day`
pub fn slot_at_minute(minute_of_day: u32) -> Option<u8> {
    SLOT_MINUTES
        .iter()
        .position(|&(start, end)| (start..=end).contains(&minute_of_day))
        .and_then(|index| u8::try_from(index + 1).ok())
}

/// School day and slot in progress at `now`
pub fn current_slot(now: NaiveDateTime) -> Option<(Weekday, u8)> {
    let day = Weekday::from_chrono(now.weekday());
    if !day.is_school_day() {
        return None;
    }
    let slot = slot_at_minute(now.hour() * 60 + now.minute())?;
    Some((day, slot))
}

/// Clear every marker in `view`, then mark the slot in progress at `now`
pub fn apply(view: &mut TimetableView, now: NaiveDateTime) {
    view.clear_highlight();
    if let Some((day, slot)) = current_slot(now) {
        view.mark_current(day, slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_interval_bounds_are_inclusive() {
        assert_eq!(slot_at_minute(480), Some(1));
        assert_eq!(slot_at_minute(560), Some(1));
        assert_eq!(slot_at_minute(561), None);
        assert_eq!(slot_at_minute(575), Some(2));
        assert_eq!(slot_at_minute(1240), Some(8));
        assert_eq!(slot_at_minute(1241), None);
        assert_eq!(slot_at_minute(479), None);
    }

    #[test]
    fn test_wednesday_morning() {
        // 2025-09-03 is a Wednesday
        assert_eq!(
            current_slot(at(2025, 9, 3, 9, 0)),
            Some((Weekday::Wednesday, 1))
        );
    }

    #[test]
    fn test_break_between_slots() {
        assert_eq!(current_slot(at(2025, 9, 3, 12, 45)), None);
    }

    #[test]
    fn test_weekend_has_no_slot() {
        // 2025-09-06 is a Saturday, 2025-09-07 a Sunday
        assert_eq!(current_slot(at(2025, 9, 6, 9, 0)), None);
        assert_eq!(current_slot(at(2025, 9, 7, 14, 0)), None);
    }

    #[test]
    fn test_friday_evening() {
        assert_eq!(
            current_slot(at(2025, 9, 5, 20, 40)),
            Some((Weekday::Friday, 8))
        );
        assert_eq!(current_slot(at(2025, 9, 5, 20, 41)), None);
    }
}
