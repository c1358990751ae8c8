//! Serialization of timetable data
//!
//! A week serializes as a flat JSON object of `"{day}-{slot}"` keys in day,
//! then slot order. Deserialization goes through `normalize` so that any
//! readable document is repaired on the way in.

use super::normalize::timetable_from_value;
use super::schedule::{Schedule, TimetableData};
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

impl Serialize for Schedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (key, subject) in &self.slots {
            map.serialize_entry(&key.to_string(), subject)?;
        }
        map.end()
    }
}

impl Serialize for TimetableData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TimetableData", 2)?;
        state.serialize_field("numerator", &self.numerator)?;
        state.serialize_field("denominator", &self.denominator)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for TimetableData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        timetable_from_value(&value).map_err(D::Error::custom)
    }
}
