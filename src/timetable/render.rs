//! Timetable view model
//!
//! The view is rebuilt from the schedule on every render. Cell and header
//! markers (`empty`, `current`) are plain flags, set before formatting.

use super::schedule::{DEFAULT_SLOTS, Schedule, SlotKey, slot_time};
use crate::formatting::{format_theme_line, markdown_table, mark_current};
use crate::theme::Theme;
use crate::week::WeekType;
use crate::weekday::Weekday;

/// Placeholder shown in a blank slot
pub const EMPTY_SUBJECT: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeader {
    pub day: Weekday,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCell {
    pub key: SlotKey,
    pub subject: String,
    /// The slot exists for this day (days may have different slot counts)
    pub present: bool,
    pub empty: bool,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub slot: u8,
    pub time: Option<&'static str>,
    pub cells: Vec<SubjectCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableView {
    pub week: WeekType,
    pub theme: Theme,
    pub headers: Vec<DayHeader>,
    pub rows: Vec<SlotRow>,
}

impl TimetableView {
    /// Lay out `schedule` as rows of slots by columns of school days
    pub fn build(schedule: &Schedule, week: WeekType, theme: Theme) -> Self {
        let headers = Weekday::SCHOOL_DAYS
            .into_iter()
            .map(|day| DayHeader { day, current: false })
            .collect();

        let row_count = schedule.max_slot_overall().max(DEFAULT_SLOTS);
        let rows = (1..=row_count)
            .map(|slot| SlotRow {
                slot,
                time: slot_time(slot),
                cells: Weekday::SCHOOL_DAYS
                    .into_iter()
                    .map(|day| {
                        let subject = schedule.get(day, slot);
                        SubjectCell {
                            key: SlotKey::new(day, slot),
                            subject: subject.unwrap_or_default().to_string(),
                            present: subject.is_some(),
                            empty: subject.is_none_or(|s| s.is_empty()),
                            current: false,
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            week,
            theme,
            headers,
            rows,
        }
    }

    pub fn clear_highlight(&mut self) {
        for header in &mut self.headers {
            header.current = false;
        }
        for cell in self.rows.iter_mut().flat_map(|row| row.cells.iter_mut()) {
            cell.current = false;
        }
    }

    /// Mark the header of `day` and the cell of `slot` on that day
    pub fn mark_current(&mut self, day: Weekday, slot: u8) {
        if let Some(header) = self.headers.iter_mut().find(|h| h.day == day) {
            header.current = true;
        }
        if let Some(row) = self.rows.iter_mut().find(|row| row.slot == slot)
            && let Some(cell) = row.cells.iter_mut().find(|cell| cell.key.day == day)
        {
            cell.current = true;
        }
    }

    pub fn current_headers(&self) -> Vec<Weekday> {
        self.headers
            .iter()
            .filter(|h| h.current)
            .map(|h| h.day)
            .collect()
    }

    pub fn current_cells(&self) -> Vec<SlotKey> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.current)
            .map(|cell| cell.key)
            .collect()
    }

    pub fn cell(&self, day: Weekday, slot: u8) -> Option<&SubjectCell> {
        self.rows
            .iter()
            .find(|row| row.slot == slot)?
            .cells
            .iter()
            .find(|cell| cell.key.day == day)
    }

    pub fn to_markdown(&self) -> String {
        let mut result = format!(
            "## Розклад: {} ({})\n",
            self.week.label(),
            self.week.as_str()
        );
        result.push_str(&format_theme_line(self.theme));
        result.push('\n');

        let mut headers = vec!["Пара".to_string()];
        headers.extend(
            self.headers
                .iter()
                .map(|h| mark_current(h.day.label(), h.current)),
        );

        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![match row.time {
                    Some(time) => format!("{} ({})", row.slot, time),
                    None => row.slot.to_string(),
                }];
                cells.extend(row.cells.iter().map(|cell| {
                    let text = if !cell.present {
                        ""
                    } else if cell.empty {
                        EMPTY_SUBJECT
                    } else {
                        cell.subject.as_str()
                    };
                    mark_current(text, cell.current)
                }));
                cells
            })
            .collect();

        result.push_str(&markdown_table(&headers, &rows));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut schedule = Schedule::new();
        schedule.materialize();
        schedule.insert(SlotKey::new(Weekday::Monday, 1), "Математика");
        schedule
    }

    #[test]
    fn test_build_default_grid() {
        let view = TimetableView::build(&sample_schedule(), WeekType::Numerator, Theme::Light);
        assert_eq!(view.headers.len(), 5);
        assert_eq!(view.rows.len(), 8);
        assert_eq!(view.rows[0].time, Some("8:00 - 9:20"));

        let cell = view.cell(Weekday::Monday, 1).unwrap();
        assert_eq!(cell.subject, "Математика");
        assert!(!cell.empty);
        assert!(view.cell(Weekday::Tuesday, 1).unwrap().empty);
    }

    #[test]
    fn test_extra_slots_add_rows() {
        let mut schedule = sample_schedule();
        for slot in 1..=8 {
            schedule.insert(SlotKey::new(Weekday::Friday, slot), "Фізика");
        }
        schedule.add_slot(Weekday::Friday).unwrap();

        let view = TimetableView::build(&schedule, WeekType::Numerator, Theme::Light);
        assert_eq!(view.rows.len(), 9);
        assert_eq!(view.rows[8].time, None);
        assert!(view.cell(Weekday::Friday, 9).unwrap().present);
        assert!(!view.cell(Weekday::Monday, 9).unwrap().present);
    }

    #[test]
    fn test_mark_and_clear() {
        let mut view = TimetableView::build(&sample_schedule(), WeekType::Numerator, Theme::Light);
        view.mark_current(Weekday::Thursday, 4);
        assert_eq!(view.current_headers(), vec![Weekday::Thursday]);
        assert_eq!(view.current_cells(), vec![SlotKey::new(Weekday::Thursday, 4)]);

        view.clear_highlight();
        assert!(view.current_headers().is_empty());
        assert!(view.current_cells().is_empty());
    }

    #[test]
    fn test_markdown_output() {
        let mut view = TimetableView::build(&sample_schedule(), WeekType::Denominator, Theme::Dark);
        view.mark_current(Weekday::Monday, 1);
        let text = view.to_markdown();

        assert!(text.starts_with("## Розклад: Знаменник (denominator)\n"));
        assert!(text.contains("data-theme: dark"));
        assert!(text.contains("| Пара | ▶ Понеділок | Вівторок |"));
        assert!(text.contains("| 1 (8:00 - 9:20) | ▶ Математика | — |"));
    }
}
