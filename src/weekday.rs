use std::fmt;
use std::str::FromStr;

/// Day of the week as shown in both tools
///
/// The Ukrainian labels double as the persisted timetable keys, so they must
/// not change (note the typographic apostrophe in `П’ятниця`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The five days that carry classes
    pub const SCHOOL_DAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Понеділок",
            Weekday::Tuesday => "Вівторок",
            Weekday::Wednesday => "Середа",
            Weekday::Thursday => "Четвер",
            Weekday::Friday => "П’ятниця",
            Weekday::Saturday => "Субота",
            Weekday::Sunday => "Неділя",
        }
    }

    /// Zero-based position, Monday = 0
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_school_day(self) -> bool {
        self.index() < Self::SCHOOL_DAYS.len()
    }

    /// Exact match against the persisted label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.label() == label)
    }

    pub fn from_chrono(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Accepts English names or three-letter abbreviations, Ukrainian labels
    /// (any apostrophe form) and day numbers 1-7.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['\'', 'ʼ', '`'], "’");
        let day = match normalized.as_str() {
            "monday" | "mon" | "1" => Some(Weekday::Monday),
            "tuesday" | "tue" | "2" => Some(Weekday::Tuesday),
            "wednesday" | "wed" | "3" => Some(Weekday::Wednesday),
            "thursday" | "thu" | "4" => Some(Weekday::Thursday),
            "friday" | "fri" | "5" => Some(Weekday::Friday),
            "saturday" | "sat" | "6" => Some(Weekday::Saturday),
            "sunday" | "sun" | "7" => Some(Weekday::Sunday),
            other => Self::ALL
                .into_iter()
                .find(|day| day.label().to_lowercase() == other),
        };
        day.ok_or_else(|| {
            format!(
                "Invalid day '{}'. Use monday..sunday, 1-7 or the Ukrainian day name",
                s
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_variants() {
        assert_eq!("wed".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("Friday".parse::<Weekday>(), Ok(Weekday::Friday));
        assert_eq!("5".parse::<Weekday>(), Ok(Weekday::Friday));
        assert_eq!("середа".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("П'ятниця".parse::<Weekday>(), Ok(Weekday::Friday));
        assert!("funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Weekday::from_label("П’ятниця"), Some(Weekday::Friday));
        assert_eq!(Weekday::from_label("П'ятниця"), None);
    }

    #[test]
    fn test_school_days() {
        assert!(Weekday::Friday.is_school_day());
        assert!(!Weekday::Saturday.is_school_day());
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun), Weekday::Sunday);
    }
}
