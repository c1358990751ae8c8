use crate::week::WeekType;
use crate::weekday::Weekday;
use serde::Serialize;

/// Lessons recorded for every day
pub const LESSONS_PER_DAY: usize = 8;

/// Day records kept for each week
pub const DAYS_PER_WEEK: usize = 7;

/// Grades accepted from input. Stored grades are not checked against this.
pub const VALID_GRADES: [&str; 4] = ["2", "3", "4", "5"];

/// One lesson row of the diary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub subject: String,
    pub homework: String,
    pub grade: String,
    pub done: bool,
}

impl Lesson {
    /// No text in any field and not marked done
    pub fn is_blank(&self) -> bool {
        !self.done
            && self.subject.trim().is_empty()
            && self.homework.trim().is_empty()
            && self.grade.trim().is_empty()
    }
}

/// One day of the diary: a free-form date and exactly `LESSONS_PER_DAY` lessons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: String,
    pub lessons: Vec<Lesson>,
}

impl Default for Day {
    fn default() -> Self {
        Self {
            date: String::new(),
            lessons: vec![Lesson::default(); LESSONS_PER_DAY],
        }
    }
}

/// Both weeks of the diary, `DAYS_PER_WEEK` days each, Monday first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryData {
    pub numerator: Vec<Day>,
    pub denominator: Vec<Day>,
}

impl Default for DiaryData {
    fn default() -> Self {
        Self {
            numerator: vec![Day::default(); DAYS_PER_WEEK],
            denominator: vec![Day::default(); DAYS_PER_WEEK],
        }
    }
}

impl DiaryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn week(&self, week: WeekType) -> &[Day] {
        match week {
            WeekType::Numerator => &self.numerator,
            WeekType::Denominator => &self.denominator,
        }
    }

    pub fn week_mut(&mut self, week: WeekType) -> &mut [Day] {
        match week {
            WeekType::Numerator => &mut self.numerator,
            WeekType::Denominator => &mut self.denominator,
        }
    }

    /// Day record of `day` in `week`. Normalized data always has all seven.
    pub fn day(&self, week: WeekType, day: Weekday) -> Option<&Day> {
        self.week(week).get(day.index())
    }

    pub fn day_mut(&mut self, week: WeekType, day: Weekday) -> Option<&mut Day> {
        self.week_mut(week).get_mut(day.index())
    }

    /// Every day record of both weeks
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.numerator.iter().chain(self.denominator.iter())
    }
}
