use crate::error::{AppError, AppResult};
use crate::week::WeekType;
use crate::weekday::Weekday;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of slots materialized for every day of a fresh week
pub const DEFAULT_SLOTS: u8 = 8;

/// Upper bound on slots per day
pub const MAX_SLOTS: u8 = 12;

/// Clock interval of each default slot
pub const SLOT_TIMES: [&str; DEFAULT_SLOTS as usize] = [
    "8:00 - 9:20",
    "9:35 - 10:55",
    "11:10 - 12:30",
    "13:00 - 14:20",
    "14:35 - 15:55",
    "16:10 - 17:30",
    "17:45 - 19:05",
    "19:20 - 20:40",
];

/// Clock interval for a 1-based slot, if it has one
pub fn slot_time(slot: u8) -> Option<&'static str> {
    SLOT_TIMES.get(usize::from(slot).checked_sub(1)?).copied()
}

/// Position of one slot in the week, persisted as `"{day label}-{slot}"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub day: Weekday,
    pub slot: u8,
}

impl SlotKey {
    pub fn new(day: Weekday, slot: u8) -> Self {
        Self { day, slot }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day.label(), self.slot)
    }
}

impl FromStr for SlotKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, slot) = s
            .rsplit_once('-')
            .ok_or_else(|| format!("Slot key '{}' has no '-' separator", s))?;
        let day = Weekday::from_label(label)
            .filter(|day| day.is_school_day())
            .ok_or_else(|| format!("Slot key '{}' names an unknown day", s))?;
        let slot: u8 = slot
            .parse()
            .map_err(|_| format!("Slot key '{}' has a non-numeric slot", s))?;
        if !(1..=MAX_SLOTS).contains(&slot) {
            return Err(format!("Slot key '{}' is outside 1..={}", s, MAX_SLOTS));
        }
        Ok(SlotKey { day, slot })
    }
}

/// Subjects of one week, keyed by slot. An empty subject is an unscheduled slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub(crate) slots: BTreeMap<SlotKey, String>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, day: Weekday, slot: u8) -> Option<&str> {
        self.slots.get(&SlotKey::new(day, slot)).map(String::as_str)
    }

    /// Slot keys come from parsing or from the edit operations, so they are
    /// always school days within `1..=MAX_SLOTS`
    pub(crate) fn insert(&mut self, key: SlotKey, subject: impl Into<String>) {
        self.slots.insert(key, subject.into());
    }

    /// Slots of one day in ascending order
    pub fn day_slots(&self, day: Weekday) -> impl Iterator<Item = (u8, &str)> {
        self.slots
            .iter()
            .filter(move |(key, _)| key.day == day)
            .map(|(key, subject)| (key.slot, subject.as_str()))
    }

    /// Highest slot index present for `day`, 0 when the day has none
    pub fn max_slot(&self, day: Weekday) -> u8 {
        self.day_slots(day).map(|(slot, _)| slot).max().unwrap_or(0)
    }

    /// Highest slot index present on any day
    pub fn max_slot_overall(&self) -> u8 {
        self.slots.keys().map(|key| key.slot).max().unwrap_or(0)
    }

    /// Fill every school day with the default blank slots
    pub fn materialize(&mut self) {
        for day in Weekday::SCHOOL_DAYS {
            for slot in 1..=DEFAULT_SLOTS {
                self.slots.entry(SlotKey::new(day, slot)).or_default();
            }
        }
    }

    /// Store a subject in an existing slot. `""` and `"—"` mark it unscheduled.
    pub fn set_subject(&mut self, day: Weekday, slot: u8, subject: &str) -> AppResult<()> {
        let entry = self
            .slots
            .get_mut(&SlotKey::new(day, slot))
            .ok_or_else(|| AppError::UnknownSlot {
                day: day.label().to_string(),
                slot,
            })?;

        let subject = subject.trim();
        *entry = if subject == "—" {
            String::new()
        } else {
            subject.to_string()
        };
        Ok(())
    }

    /// Append one blank slot after the highest existing one.
    ///
    /// Rejected while any slot of the day is blank, or once the day holds
    /// `MAX_SLOTS`. Returns the index of the new slot.
    pub fn add_slot(&mut self, day: Weekday) -> AppResult<u8> {
        if self.day_slots(day).any(|(_, subject)| subject.trim().is_empty()) {
            return Err(AppError::FreeSlotExists {
                day: day.label().to_string(),
            });
        }

        let max_slot = self.max_slot(day);
        if max_slot >= MAX_SLOTS {
            return Err(AppError::SlotLimitReached {
                day: day.label().to_string(),
                max: MAX_SLOTS,
            });
        }

        let new_slot = max_slot + 1;
        self.slots.insert(SlotKey::new(day, new_slot), String::new());
        Ok(new_slot)
    }
}

/// Both weeks of the timetable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimetableData {
    pub numerator: Schedule,
    pub denominator: Schedule,
}

impl TimetableData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn week(&self, week: WeekType) -> &Schedule {
        match week {
            WeekType::Numerator => &self.numerator,
            WeekType::Denominator => &self.denominator,
        }
    }

    pub fn week_mut(&mut self, week: WeekType) -> &mut Schedule {
        match week {
            WeekType::Numerator => &mut self.numerator,
            WeekType::Denominator => &mut self.denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_day(day: Weekday, count: u8) -> Schedule {
        let mut schedule = Schedule::new();
        for slot in 1..=count {
            schedule.insert(SlotKey::new(day, slot), format!("Subject {}", slot));
        }
        schedule
    }

    #[test]
    fn test_slot_key_round_trip_text() {
        let key = SlotKey::new(Weekday::Friday, 3);
        assert_eq!(key.to_string(), "П’ятниця-3");
        assert_eq!("П’ятниця-3".parse::<SlotKey>(), Ok(key));
    }

    #[test]
    fn test_slot_key_rejects_bad_keys() {
        assert!("Субота-1".parse::<SlotKey>().is_err());
        assert!("Середа-13".parse::<SlotKey>().is_err());
        assert!("Середа-0".parse::<SlotKey>().is_err());
        assert!("Середа".parse::<SlotKey>().is_err());
        assert!("Wednesday-1".parse::<SlotKey>().is_err());
    }

    #[test]
    fn test_materialize_fills_default_grid() {
        let mut schedule = Schedule::new();
        schedule.materialize();
        assert_eq!(schedule.len(), 5 * DEFAULT_SLOTS as usize);
        assert_eq!(schedule.get(Weekday::Monday, 8), Some(""));
        assert!(schedule.get(Weekday::Monday, 9).is_none());
    }

    #[test]
    fn test_add_slot_appends_after_max() {
        let mut schedule = filled_day(Weekday::Tuesday, 8);
        assert_eq!(schedule.add_slot(Weekday::Tuesday).unwrap(), 9);
        assert_eq!(schedule.get(Weekday::Tuesday, 9), Some(""));
        assert_eq!(schedule.day_slots(Weekday::Tuesday).count(), 9);
    }

    #[test]
    fn test_add_slot_to_empty_day_starts_at_one() {
        let mut schedule = Schedule::new();
        assert_eq!(schedule.add_slot(Weekday::Monday).unwrap(), 1);
    }

    #[test]
    fn test_add_slot_rejected_with_blank_slot() {
        let mut schedule = filled_day(Weekday::Thursday, 4);
        schedule.set_subject(Weekday::Thursday, 2, "   ").unwrap();
        let before = schedule.clone();

        let result = schedule.add_slot(Weekday::Thursday);
        assert!(matches!(result, Err(AppError::FreeSlotExists { .. })));
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_add_slot_rejected_at_limit() {
        let mut schedule = filled_day(Weekday::Monday, MAX_SLOTS);
        let result = schedule.add_slot(Weekday::Monday);
        assert!(matches!(result, Err(AppError::SlotLimitReached { max: 12, .. })));
        assert_eq!(schedule.max_slot(Weekday::Monday), MAX_SLOTS);
    }

    #[test]
    fn test_set_subject_dash_means_blank() {
        let mut schedule = filled_day(Weekday::Monday, 2);
        schedule.set_subject(Weekday::Monday, 1, " — ").unwrap();
        assert_eq!(schedule.get(Weekday::Monday, 1), Some(""));
        schedule.set_subject(Weekday::Monday, 2, "  Хімія ").unwrap();
        assert_eq!(schedule.get(Weekday::Monday, 2), Some("Хімія"));
    }

    #[test]
    fn test_set_subject_on_missing_slot() {
        let mut schedule = filled_day(Weekday::Monday, 2);
        let result = schedule.set_subject(Weekday::Monday, 3, "Історія");
        assert!(matches!(result, Err(AppError::UnknownSlot { slot: 3, .. })));
    }

    #[test]
    fn test_slot_time() {
        assert_eq!(slot_time(1), Some("8:00 - 9:20"));
        assert_eq!(slot_time(8), Some("19:20 - 20:40"));
        assert_eq!(slot_time(9), None);
        assert_eq!(slot_time(0), None);
    }
}
