use chrono::Weekday;
use serde::{
    Serialize,
    Deserialize
};

use crate::time::localenames::{canonical_day_name, name_of_weekday};

/// Weekly holiday keyed by an Indonesian weekday name, e.g. every "Minggu".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultDayRule {
    day: String,
    description: String
}

impl DefaultDayRule {
    pub fn new(day: &str, description: impl Into<String>) -> DefaultDayRule {
        DefaultDayRule {
            day: canonical_day_name(day),
            description: description.into()
        }
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn applies_to(&self, weekday: Weekday) -> bool {
        self.day == name_of_weekday(weekday)
    }
}
