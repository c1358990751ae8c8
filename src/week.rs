use std::fmt;
use std::str::FromStr;

/// Which of the two alternating weeks of a biweekly schedule is selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeekType {
    #[default]
    Numerator,
    Denominator,
}

impl WeekType {
    pub fn as_str(self) -> &'static str {
        match self {
            WeekType::Numerator => "numerator",
            WeekType::Denominator => "denominator",
        }
    }

    /// Heading shown above a rendered table
    pub fn label(self) -> &'static str {
        match self {
            WeekType::Numerator => "Чисельник",
            WeekType::Denominator => "Знаменник",
        }
    }
}

impl fmt::Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "numerator" | "чисельник" => Ok(WeekType::Numerator),
            "denominator" | "знаменник" => Ok(WeekType::Denominator),
            _ => Err(format!(
                "Invalid week '{}'. Valid options are: numerator, denominator",
                s
            )),
        }
    }
}
